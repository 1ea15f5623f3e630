mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

fn ids(products: &Value) -> Vec<i64> {
    products
        .as_array()
        .map(|items| items.iter().filter_map(|p| p["id"].as_i64()).collect())
        .unwrap_or_default()
}

#[tokio::test]
async fn create_single_then_batch_then_filter() -> Result<()> {
    let server = common::start_server().await?;
    let client = reqwest::Client::new();

    let cheese = json!({
        "name": "Cheese",
        "quantity": 10,
        "code_value": "ABC123",
        "is_published": true,
        "expiration": "2022-12-31",
        "price": 9.99
    });
    let res = client
        .post(server.url("/products/"))
        .header("Authorization", common::API_TOKEN)
        .json(&cheese)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Product created successfully");
    assert_eq!(body["data"]["id"], 1);

    let batch = json!([
        { "name": "Jam", "quantity": 5, "code_value": "XYZ789", "is_published": false,
          "expiration": "2023-06-30", "price": 19.99 },
        { "name": "Butter", "quantity": 10, "code_value": "ASD456", "is_published": true,
          "expiration": "2023-04-30", "price": 49.99 }
    ]);
    let res = client
        .post(server.url("/products/range"))
        .header("Authorization", common::API_TOKEN)
        .json(&batch)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Products created successfully");
    assert_eq!(ids(&body["data"]), vec![1, 2, 3]);

    let above = reqwest::get(server.url("/products/price/10")).await?;
    assert_eq!(above.status(), StatusCode::OK);
    assert_eq!(ids(&above.json::<Value>().await?), vec![2, 3]);

    let fetched = reqwest::get(server.url("/products/1")).await?;
    assert_eq!(fetched.status(), StatusCode::OK);
    let mut expected = cheese.clone();
    expected["id"] = json!(1);
    assert_eq!(fetched.json::<Value>().await?, expected);

    let all = reqwest::get(server.url("/products/")).await?.json::<Value>().await?;
    assert_eq!(ids(&all), vec![1, 2, 3]);

    Ok(())
}

#[tokio::test]
async fn unknown_id_is_not_found() -> Result<()> {
    let server = common::start_server().await?;

    let res = reqwest::get(server.url("/products/99")).await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?, json!({ "message": "Product not found" }));

    Ok(())
}

#[tokio::test]
async fn malformed_path_parameters_are_bad_requests() -> Result<()> {
    let server = common::start_server().await?;

    let res = reqwest::get(server.url("/products/one")).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert!(body["error"].as_str().unwrap_or_default().contains("'one'"), "{}", body);

    let res = reqwest::get(server.url("/products/price/ten")).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert!(body["error"].as_str().unwrap_or_default().contains("'ten'"), "{}", body);

    Ok(())
}
