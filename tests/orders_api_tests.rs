//! End-to-end tests for the /orders resource
//!
//! Covers the order lifecycle rules: delivered orders are frozen, only
//! pending orders can be deleted, and every order carries at least one dish
//! with a positive quantity.

use axum::http::StatusCode;
use axum_test::TestServer;
use grubdash::prelude::*;
use serde_json::{Map, Value, json};

fn order(id: &str, status: OrderStatus) -> Order {
    let mut dish = Map::new();
    dish.insert("id".to_string(), json!("d1"));
    dish.insert("name".to_string(), json!("Soup"));

    Order {
        id: id.to_string(),
        deliver_to: "12 Main St".to_string(),
        mobile_number: "(555) 010-0000".to_string(),
        status,
        dishes: vec![OrderLineItem { quantity: 1, dish }],
    }
}

fn create_test_server(seed: Vec<Order>) -> (TestServer, InMemoryCollection<Order>) {
    let store = InMemoryCollection::with_seed(seed).expect("Failed to seed orders");

    let app = ServerBuilder::new()
        .with_order_store(store.clone())
        .build()
        .expect("Failed to build app");

    let server = TestServer::try_new(app).expect("Failed to create test server");
    (server, store)
}

fn order_body(status: Option<&str>) -> Value {
    let mut body = json!({
        "data": {
            "deliverTo": "A",
            "mobileNumber": "555",
            "dishes": [{ "id": "d1", "quantity": 2 }]
        }
    });
    if let Some(status) = status {
        body["data"]["status"] = json!(status);
    }
    body
}

fn assert_error(body: &Value, status: u16, message: &str) {
    assert_eq!(body["status"], status);
    assert_eq!(body["message"], message);
}

// =============================================================================
// List / Read
// =============================================================================

mod read_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_orders() {
        let (server, _) = create_test_server(vec![
            order("1", OrderStatus::Pending),
            order("2", OrderStatus::Delivered),
        ]);

        let response = server.get("/orders").await;
        response.assert_status_ok();

        let body: Value = response.json();
        let items = body["data"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1]["status"], "delivered");
        assert_eq!(items[0]["deliverTo"], "12 Main St");
        assert_eq!(items[0]["dishes"][0]["name"], "Soup");
    }

    #[tokio::test]
    async fn test_get_order() {
        let (server, _) = create_test_server(vec![order("1", OrderStatus::OutForDelivery)]);

        let response = server.get("/orders/1").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"]["id"], "1");
        assert_eq!(body["data"]["status"], "out-for-delivery");
        assert_eq!(body["data"]["mobileNumber"], "(555) 010-0000");
    }

    #[tokio::test]
    async fn test_get_missing_order() {
        let (server, _) = create_test_server(vec![]);

        let response = server.get("/orders/42").await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_error(&response.json(), 404, "Order id not found: 42");
    }
}

// =============================================================================
// Create
// =============================================================================

mod create_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_order_defaults_to_pending() {
        let (server, store) = create_test_server(vec![]);

        let response = server.post("/orders").json(&order_body(None)).await;
        response.assert_status(StatusCode::CREATED);

        let body: Value = response.json();
        let id = body["data"]["id"].as_str().unwrap().to_string();
        assert_eq!(
            body,
            json!({
                "data": {
                    "id": id,
                    "deliverTo": "A",
                    "mobileNumber": "555",
                    "status": "pending",
                    "dishes": [{ "id": "d1", "quantity": 2 }]
                }
            })
        );
        assert_eq!(store.find(&id).unwrap().unwrap().status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn test_create_order_directly_delivered() {
        let (server, _) = create_test_server(vec![]);

        let response = server.post("/orders").json(&order_body(Some("delivered"))).await;
        response.assert_status(StatusCode::CREATED);

        let body: Value = response.json();
        assert_eq!(body["data"]["status"], "delivered");
    }

    #[tokio::test]
    async fn test_create_order_invalid_status() {
        let (server, store) = create_test_server(vec![]);

        let response = server.post("/orders").json(&order_body(Some("lost"))).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_error(
            &response.json(),
            400,
            "Order must have a status of pending, preparing, out-for-delivery, delivered",
        );
        assert!(store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_create_order_missing_fields() {
        let (server, _) = create_test_server(vec![]);

        for (field, message) in [
            ("deliverTo", "Order must include a deliverTo"),
            ("mobileNumber", "Order must include a mobileNumber"),
            ("dishes", "Order must include a dishes"),
        ] {
            let mut body = order_body(None);
            body["data"].as_object_mut().unwrap().remove(field);

            let response = server.post("/orders").json(&body).await;
            response.assert_status(StatusCode::BAD_REQUEST);
            assert_error(&response.json(), 400, message);
        }
    }

    #[tokio::test]
    async fn test_create_order_empty_dishes() {
        let (server, _) = create_test_server(vec![]);

        let mut body = order_body(None);
        body["data"]["dishes"] = json!([]);

        let response = server.post("/orders").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_error(&response.json(), 400, "Order must include at least one dish");
    }

    #[tokio::test]
    async fn test_create_order_bad_quantity_reports_first_index() {
        let (server, _) = create_test_server(vec![]);

        let mut body = order_body(None);
        body["data"]["dishes"] = json!([
            { "id": "d1", "quantity": 1 },
            { "id": "d2", "quantity": 2 },
            { "id": "d3", "quantity": "3" },
            { "id": "d4" }
        ]);

        let response = server.post("/orders").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_error(
            &response.json(),
            400,
            "dish 2 must have a quantity that is an integer greater than 0",
        );
    }
}

// =============================================================================
// Update
// =============================================================================

mod update_tests {
    use super::*;

    #[tokio::test]
    async fn test_update_to_delivered_then_frozen() {
        let (server, store) = create_test_server(vec![order("5", OrderStatus::Pending)]);

        let body = json!({
            "data": {
                "id": 5,
                "deliverTo": "A",
                "mobileNumber": "555",
                "status": "delivered",
                "dishes": [{ "id": "d1", "quantity": 2 }]
            }
        });

        let response = server.put("/orders/5").json(&body).await;
        response.assert_status_ok();

        let updated: Value = response.json();
        assert_eq!(updated["data"]["id"], "5");
        assert_eq!(updated["data"]["status"], "delivered");
        assert_eq!(updated["data"]["deliverTo"], "A");
        assert_eq!(store.find("5").unwrap().unwrap().status, OrderStatus::Delivered);

        for status in ["delivered", "preparing", "pending"] {
            let mut again = body.clone();
            again["data"]["status"] = json!(status);

            let response = server.put("/orders/5").json(&again).await;
            response.assert_status(StatusCode::BAD_REQUEST);
            assert_error(&response.json(), 400, "A delivered order cannot be changed");
        }
    }

    #[tokio::test]
    async fn test_update_requires_status() {
        let (server, _) = create_test_server(vec![order("1", OrderStatus::Preparing)]);

        for status in [None, Some(""), Some("shipped")] {
            let response = server.put("/orders/1").json(&order_body(status)).await;
            response.assert_status(StatusCode::BAD_REQUEST);
            assert_error(
                &response.json(),
                400,
                "Order must have a status of pending, preparing, out-for-delivery, delivered",
            );
        }
    }

    #[tokio::test]
    async fn test_update_replaces_fields_but_not_id() {
        let (server, store) = create_test_server(vec![order("1", OrderStatus::Pending)]);

        let mut body = order_body(Some("preparing"));
        body["data"]["dishes"] = json!([
            { "id": "d7", "name": "Curry", "quantity": 3 },
            { "id": "d8", "quantity": 1 }
        ]);

        let response = server.put("/orders/1").json(&body).await;
        response.assert_status_ok();

        let stored = store.find("1").unwrap().unwrap();
        assert_eq!(stored.id, "1");
        assert_eq!(stored.deliver_to, "A");
        assert_eq!(stored.status, OrderStatus::Preparing);
        assert_eq!(stored.dishes.len(), 2);
        assert_eq!(stored.dishes[0].quantity, 3);
        assert_eq!(stored.dishes[0].dish["id"], "d7");
    }

    #[tokio::test]
    async fn test_update_id_mismatch() {
        let (server, store) = create_test_server(vec![order("1", OrderStatus::Pending)]);

        let mut body = order_body(Some("preparing"));
        body["data"]["id"] = json!("2");

        let response = server.put("/orders/1").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_error(
            &response.json(),
            400,
            "Order id does not match route id. Order: 2, Route: 1",
        );
        assert_eq!(store.find("1").unwrap().unwrap().status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn test_update_empty_dishes() {
        let (server, _) = create_test_server(vec![order("1", OrderStatus::Pending)]);

        let mut body = order_body(Some("preparing"));
        body["data"]["dishes"] = json!([]);

        let response = server.put("/orders/1").json(&body).await;
        assert_error(&response.json(), 400, "Order must include at least one dish");
    }

    #[tokio::test]
    async fn test_update_missing_order() {
        let (server, _) = create_test_server(vec![]);

        let response = server.put("/orders/9").json(&order_body(Some("pending"))).await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_error(&response.json(), 404, "Order id not found: 9");
    }
}

// =============================================================================
// Delete
// =============================================================================

mod delete_tests {
    use super::*;

    #[tokio::test]
    async fn test_delete_pending_order() {
        let (server, store) = create_test_server(vec![order("1", OrderStatus::Pending)]);

        let response = server.delete("/orders/1").await;
        response.assert_status(StatusCode::NO_CONTENT);
        assert!(response.as_bytes().is_empty());
        assert!(store.is_empty().unwrap());

        let response = server.get("/orders/1").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_non_pending_order() {
        let (server, store) = create_test_server(vec![
            order("1", OrderStatus::Preparing),
            order("2", OrderStatus::OutForDelivery),
            order("3", OrderStatus::Delivered),
        ]);

        for id in ["1", "2", "3"] {
            let response = server.delete(&format!("/orders/{}", id)).await;
            response.assert_status(StatusCode::BAD_REQUEST);
            assert_error(
                &response.json(),
                400,
                "An order cannot be deleted unless it is pending",
            );
        }
        assert_eq!(store.len().unwrap(), 3);
    }

    #[tokio::test]
    async fn test_delete_missing_order() {
        let (server, _) = create_test_server(vec![]);

        let response = server.delete("/orders/nope").await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_error(&response.json(), 404, "Order id not found: nope");
    }

    #[tokio::test]
    async fn test_collection_delete_not_allowed() {
        let (server, _) = create_test_server(vec![order("1", OrderStatus::Pending)]);

        let response = server.delete("/orders").await;
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        assert_error(&response.json(), 405, "DELETE not allowed for /orders");
    }
}
