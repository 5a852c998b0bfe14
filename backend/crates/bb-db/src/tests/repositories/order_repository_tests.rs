use crate::OrderRepository;

use bb_core::{Order, OrderItem, OrderStatus};

use googletest::assert_that;
use googletest::prelude::eq;

fn item(name: &str) -> OrderItem {
    OrderItem {
        item_name: name.to_string(),
        quantity: 2,
        price: 4.5,
    }
}

#[tokio::test]
async fn given_pending_order_when_created_then_id_assigned_and_status_kept() {
    let repo = OrderRepository::new();

    let order = repo
        .create(Order::pending(42, 1, vec![item("Fufu")]))
        .await
        .unwrap();

    assert_that!(order.id, eq(1));
    assert_that!(order.status, eq(OrderStatus::Pending));
    assert_eq!(repo.find_by_customer(42).await.unwrap(), vec![order]);
    assert_that!(repo.count().await, eq(1));
}

#[tokio::test]
async fn given_orders_from_many_customers_when_filtered_then_only_matching() {
    let repo = OrderRepository::new();
    repo.create(Order::pending(42, 1, vec![item("A")])).await.unwrap();
    repo.create(Order::pending(43, 1, vec![item("B")])).await.unwrap();
    repo.create(Order::pending(42, 2, vec![item("C")])).await.unwrap();

    let mine = repo.find_by_customer(42).await.unwrap();
    let restaurant_one = repo.find_by_restaurant(1).await.unwrap();

    assert_that!(mine.len(), eq(2));
    assert!(mine.iter().all(|o| o.customer_id == 42));
    assert_that!(restaurant_one.len(), eq(2));
    assert!(restaurant_one.iter().all(|o| o.restaurant_id == 1));
}

#[tokio::test]
async fn given_concurrent_inserts_when_committed_then_ids_unique() {
    let repo = OrderRepository::new();

    let handles: Vec<_> = (0..16)
        .map(|n| {
            let repo = repo.clone();
            tokio::spawn(async move {
                repo.create(Order::pending(n + 1, 1, vec![item("X")]))
                    .await
                    .unwrap()
                    .id
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort_unstable();
    ids.dedup();

    assert_that!(ids.len(), eq(16));
}
