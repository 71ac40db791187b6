#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use chrono::{DateTime, Local, NaiveDate, TimeZone};
    use tokio_stream::StreamExt;

    use crate::app_system::{default_menu, CanteenConfig, CanteenSystem};
    use crate::clock::{Clock, FixedClock};
    use crate::domain::{Cart, ItemId, MenuItem, OrderId, StudentId};
    use crate::mock_framework::{create_mock_store, expect_commit, expect_get_item, expect_get_order};
    use crate::reservation::{CheckoutSession, CheckoutState, OrderingWindow, ReservationError, ReservationService};
    use crate::staff::StaffClient;
    use crate::store::{DocKey, RetryPolicy, StoreActor, StoreClient, StoreError, Versioned, Write, ABSENT};

    fn ten_am() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 19, 10, 0, 0).single().unwrap()
    }

    /// Advances one minute every time it is read.
    struct TickingClock {
        start: DateTime<Local>,
        ticks: AtomicI64,
    }

    impl Clock for TickingClock {
        fn now(&self) -> DateTime<Local> {
            self.start + chrono::Duration::minutes(self.ticks.fetch_add(1, Ordering::SeqCst))
        }
    }

    fn today() -> NaiveDate {
        ten_am().date_naive()
    }

    fn fast_retry(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            base_backoff: Duration::from_millis(1),
            max_backoff: Duration::from_millis(2),
        }
    }

    fn student(gr: &str) -> StudentId {
        StudentId::parse(gr).unwrap()
    }

    fn burger(current_ordered: u32) -> MenuItem {
        let mut item = MenuItem::new("5", "Chicken Burger", "Meal", 8.0, 5);
        item.current_ordered = current_ordered;
        item
    }

    fn coffee() -> MenuItem {
        MenuItem::new("1", "Premium Coffee", "Beverage", 3.0, 30)
    }

    async fn start_store(items: Vec<MenuItem>) -> StoreClient {
        let (actor, store) = StoreActor::new(64, 64);
        tokio::spawn(actor.run());
        for item in items {
            store.insert_item(item).await.unwrap();
        }
        store
    }

    fn service(store: &StoreClient, retry: RetryPolicy) -> ReservationService {
        ReservationService::new(store.clone(), retry, Arc::new(FixedClock(ten_am())))
    }

    async fn ordered(store: &StoreClient, id: &str) -> u32 {
        store.get_item(ItemId::from(id)).await.unwrap().unwrap().value.current_ordered
    }

    // -------------------------------------------------------------------------
    // Reservation against the real store actor
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn remaining_capacity_can_be_sold_exactly() {
        let store = start_store(vec![burger(3)]).await;
        let reservations = service(&store, fast_retry(5));

        let order = reservations
            .place_order(&student("12345"), &Cart::new().with("5", 2))
            .await
            .unwrap();

        assert_eq!(ordered(&store, "5").await, 5);
        assert_eq!(order.id, OrderId::for_day(today(), &student("12345")));
        assert_eq!(order.total_price, 16.0);
        assert_eq!(order.created_at, ten_am().with_timezone(&chrono::Utc));
    }

    #[tokio::test]
    async fn over_request_is_rejected_without_side_effects() {
        let store = start_store(vec![burger(3)]).await;
        let reservations = service(&store, fast_retry(5));

        let err = reservations
            .place_order(&student("12345"), &Cart::new().with("5", 3))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ReservationError::InsufficientStock {
                item_id: ItemId::from("5"),
                name: "Chicken Burger".to_string(),
                requested: 3,
                remaining: 2,
            }
        );
        assert_eq!(ordered(&store, "5").await, 3);
        assert!(store.list_orders(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn manual_sold_out_rejects_any_quantity() {
        let mut item = burger(0);
        item.manual_sold_out = true;
        let store = start_store(vec![item]).await;
        let reservations = service(&store, fast_retry(5));

        let err = reservations
            .place_order(&student("12345"), &Cart::new().with("5", 1))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ReservationError::ManuallyDisabled {
                item_id: ItemId::from("5"),
                name: "Chicken Burger".to_string(),
            }
        );
        assert_eq!(ordered(&store, "5").await, 0);
    }

    #[tokio::test]
    async fn failing_item_leaves_earlier_items_untouched() {
        let store = start_store(vec![coffee(), burger(4)]).await;
        let reservations = service(&store, fast_retry(5));

        let cart = Cart::new().with("1", 2).with("5", 2);
        let err = reservations.place_order(&student("12345"), &cart).await.unwrap_err();

        assert_eq!(err.item_id(), Some(&ItemId::from("5")));
        assert_eq!(ordered(&store, "1").await, 0);
        assert_eq!(ordered(&store, "5").await, 4);
        assert!(store.list_orders(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn first_offending_item_is_named() {
        let mut donut = MenuItem::new("3", "Chocolate Donut", "Dessert", 4.0, 10);
        donut.manual_sold_out = true;
        let store = start_store(vec![coffee(), burger(5), donut]).await;
        let reservations = service(&store, fast_retry(5));

        let cart = Cart::new().with("1", 1).with("5", 1).with("3", 1);
        let err = reservations.place_order(&student("12345"), &cart).await.unwrap_err();

        assert!(matches!(err, ReservationError::InsufficientStock { ref item_id, .. } if item_id.as_str() == "5"));
    }

    #[tokio::test]
    async fn unknown_item_is_reported() {
        let store = start_store(vec![coffee()]).await;
        let reservations = service(&store, fast_retry(5));

        let err = reservations
            .place_order(&student("12345"), &Cart::new().with("1", 1).with("99", 1))
            .await
            .unwrap_err();

        assert_eq!(err, ReservationError::ItemNotFound(ItemId::from("99")));
        assert_eq!(ordered(&store, "1").await, 0);
    }

    #[tokio::test]
    async fn invalid_carts_never_reach_the_store() {
        let (client, mut receiver) = create_mock_store(4);
        let reservations = service(&client, fast_retry(5));

        let empty = reservations.place_order(&student("12345"), &Cart::new()).await;
        let zero = reservations.place_order(&student("12345"), &Cart::new().with("5", 0)).await;

        assert!(matches!(empty, Err(ReservationError::InvalidCart(_))));
        assert!(matches!(zero, Err(ReservationError::InvalidCart(_))));
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn orders_outside_the_window_are_refused() {
        let store = start_store(vec![burger(0)]).await;
        let one_pm = Local.with_ymd_and_hms(2026, 10, 19, 13, 0, 0).single().unwrap();
        let reservations = ReservationService::new(store.clone(), fast_retry(5), Arc::new(FixedClock(one_pm)))
            .with_ordering_window(Some(OrderingWindow::default()));

        let err = reservations
            .place_order(&student("12345"), &Cart::new().with("5", 1))
            .await
            .unwrap_err();

        assert!(matches!(err, ReservationError::OrderingClosed { .. }));
        assert_eq!(ordered(&store, "5").await, 0);
    }

    #[tokio::test]
    async fn second_order_on_the_same_day_is_rejected() {
        let store = start_store(vec![coffee()]).await;
        let reservations = service(&store, fast_retry(5));
        let gr = student("4021");

        let first = reservations.place_order(&gr, &Cart::new().with("1", 1)).await.unwrap();
        let second = reservations.place_order(&gr, &Cart::new().with("1", 2)).await;

        assert_eq!(second, Err(ReservationError::AlreadyOrdered(first.id.clone())));
        assert_eq!(ordered(&store, "1").await, 1);
        assert_eq!(store.list_orders(Some(today())).await.unwrap(), vec![first]);
    }

    #[tokio::test]
    async fn order_keeps_price_at_commit_time() {
        let store = start_store(vec![coffee()]).await;
        let reservations = service(&store, fast_retry(5));
        let staff = StaffClient::new(store.clone(), fast_retry(5));

        let order = reservations
            .place_order(&student("12345"), &Cart::new().with("1", 2))
            .await
            .unwrap();
        staff.update_price(ItemId::from("1"), 3.5).await.unwrap();

        let stored = store.get_order(order.id.clone()).await.unwrap().unwrap().value;
        assert_eq!(stored.lines[0].unit_price, 3.0);
        assert_eq!(stored.total_price, 6.0);
        let item = store.get_item(ItemId::from("1")).await.unwrap().unwrap().value;
        assert_eq!(item.price, 3.5);
    }

    // -------------------------------------------------------------------------
    // Concurrency
    // -------------------------------------------------------------------------

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_carts_cannot_both_take_the_last_units() {
        let store = start_store(vec![burger(0)]).await;
        let reservations = service(&store, fast_retry(5));

        let a = {
            let reservations = reservations.clone();
            tokio::spawn(async move { reservations.place_order(&student("1001"), &Cart::new().with("5", 3)).await })
        };
        let b = {
            let reservations = reservations.clone();
            tokio::spawn(async move { reservations.place_order(&student("1002"), &Cart::new().with("5", 3)).await })
        };
        let results = [a.await.unwrap(), b.await.unwrap()];

        let committed = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(committed, 1);
        let rejected = results.iter().find_map(|r| r.as_ref().err()).unwrap();
        assert!(matches!(rejected, ReservationError::InsufficientStock { remaining: 2, .. }));
        assert_eq!(ordered(&store, "5").await, 3);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_rush_never_exceeds_the_limit() {
        let mut item = MenuItem::new("2", "Veggie Sandwich", "Snack", 5.0, 10);
        item.current_ordered = 0;
        let store = start_store(vec![item, coffee()]).await;
        let reservations = service(&store, fast_retry(50));

        let mut tasks = Vec::new();
        for n in 0..24u32 {
            let reservations = reservations.clone();
            let quantity = n % 3 + 1;
            tasks.push(tokio::spawn(async move {
                let gr = student(&format!("{}", 1000 + n));
                let cart = Cart::new().with("1", 1).with("2", quantity);
                reservations.place_order(&gr, &cart).await.map(|order| order.lines[1].quantity)
            }));
        }

        let mut sold = 0;
        let mut orders = 0;
        for task in tasks {
            match task.await.unwrap() {
                Ok(quantity) => {
                    sold += quantity;
                    orders += 1;
                }
                Err(e) => assert!(
                    matches!(
                        e,
                        ReservationError::InsufficientStock { .. } | ReservationError::ConflictRetryExhausted { .. }
                    ),
                    "unexpected error: {e}"
                ),
            }
        }

        assert!(sold <= 10);
        assert_eq!(ordered(&store, "2").await, sold);
        assert_eq!(ordered(&store, "1").await, orders);
        assert_eq!(store.list_orders(None).await.unwrap().len() as u32, orders);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn racing_attempts_by_one_student_create_one_order() {
        let store = start_store(vec![coffee()]).await;
        let reservations = service(&store, fast_retry(10));

        let mut tasks = Vec::new();
        for _ in 0..4 {
            let reservations = reservations.clone();
            tasks.push(tokio::spawn(async move {
                reservations.place_order(&student("777"), &Cart::new().with("1", 1)).await
            }));
        }

        let mut committed = 0;
        for task in tasks {
            match task.await.unwrap() {
                Ok(_) => committed += 1,
                Err(e) => assert!(matches!(e, ReservationError::AlreadyOrdered(_)), "unexpected error: {e}"),
            }
        }

        assert_eq!(committed, 1);
        assert_eq!(ordered(&store, "1").await, 1);
        assert_eq!(store.list_orders(None).await.unwrap().len(), 1);
    }

    // -------------------------------------------------------------------------
    // Retry behaviour, driven through a scripted store
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn conflict_reruns_the_transaction_against_fresh_state() {
        let (client, mut store_rx) = create_mock_store(10);
        let reservations = service(&client, fast_retry(3));
        let gr = student("12345");
        let order_id = OrderId::for_day(today(), &gr);

        let order_task = tokio::spawn(async move {
            reservations.place_order(&gr, &Cart::new().with("5", 2)).await
        });

        // Attempt 1: reads see version 1 with 3 ordered, commit conflicts
        let (id, responder) = expect_get_order(&mut store_rx).await.expect("Expected GetOrder");
        assert_eq!(id, order_id);
        responder.send(Ok(None)).unwrap();

        let (id, responder) = expect_get_item(&mut store_rx).await.expect("Expected GetItem");
        assert_eq!(id, ItemId::from("5"));
        responder.send(Ok(Some(Versioned { version: 1, value: burger(3) }))).unwrap();

        let (reads, writes, responder) = expect_commit(&mut store_rx).await.expect("Expected Commit");
        assert_eq!(
            reads,
            vec![(DocKey::Order(order_id.clone()), ABSENT), (DocKey::Item(ItemId::from("5")), 1)]
        );
        assert!(matches!(&writes[0], Write::PutItem(item) if item.current_ordered == 5));
        assert!(matches!(&writes[1], Write::PutOrder(order) if order.id == order_id));
        responder
            .send(Err(StoreError::Conflict {
                key: DocKey::Item(ItemId::from("5")),
                expected: 1,
                actual: 2,
            }))
            .unwrap();

        // Attempt 2: someone else took a burger in between
        let (_, responder) = expect_get_order(&mut store_rx).await.expect("Expected GetOrder");
        responder.send(Ok(None)).unwrap();
        let (_, responder) = expect_get_item(&mut store_rx).await.expect("Expected GetItem");
        responder.send(Ok(Some(Versioned { version: 2, value: burger(4) }))).unwrap();

        let result = order_task.await.unwrap();
        assert!(matches!(
            result,
            Err(ReservationError::InsufficientStock { requested: 2, remaining: 1, .. })
        ));
        assert!(store_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn retried_order_is_stamped_with_its_commit_time() {
        let (client, mut store_rx) = create_mock_store(10);
        let clock = Arc::new(TickingClock {
            start: ten_am(),
            ticks: AtomicI64::new(0),
        });
        let reservations = ReservationService::new(client, fast_retry(3), clock);

        let order_task = tokio::spawn(async move {
            reservations.place_order(&student("12345"), &Cart::new().with("5", 1)).await
        });

        for version in 1..=2 {
            let (_, responder) = expect_get_order(&mut store_rx).await.expect("Expected GetOrder");
            responder.send(Ok(None)).unwrap();
            let (_, responder) = expect_get_item(&mut store_rx).await.expect("Expected GetItem");
            responder.send(Ok(Some(Versioned { version, value: burger(0) }))).unwrap();
            let (_, _, responder) = expect_commit(&mut store_rx).await.expect("Expected Commit");
            let reply = if version == 1 {
                Err(StoreError::Conflict {
                    key: DocKey::Item(ItemId::from("5")),
                    expected: 1,
                    actual: 2,
                })
            } else {
                Ok(())
            };
            responder.send(reply).unwrap();
        }

        // Read once at submission, then once per attempt
        let order = order_task.await.unwrap().unwrap();
        let second_attempt = ten_am() + chrono::Duration::minutes(2);
        assert_eq!(order.created_at, second_attempt.with_timezone(&chrono::Utc));
        assert_eq!(order.day, today());
    }

    #[tokio::test]
    async fn persistent_conflicts_exhaust_the_retry_budget() {
        let (client, mut store_rx) = create_mock_store(10);
        let reservations = service(&client, fast_retry(2));

        let order_task = tokio::spawn(async move {
            reservations.place_order(&student("12345"), &Cart::new().with("5", 1)).await
        });

        for version in 1..=2 {
            let (_, responder) = expect_get_order(&mut store_rx).await.expect("Expected GetOrder");
            responder.send(Ok(None)).unwrap();
            let (_, responder) = expect_get_item(&mut store_rx).await.expect("Expected GetItem");
            responder.send(Ok(Some(Versioned { version, value: burger(0) }))).unwrap();
            let (_, _, responder) = expect_commit(&mut store_rx).await.expect("Expected Commit");
            responder
                .send(Err(StoreError::Conflict {
                    key: DocKey::Item(ItemId::from("5")),
                    expected: version,
                    actual: version + 1,
                }))
                .unwrap();
        }

        let result = order_task.await.unwrap();
        assert_eq!(result, Err(ReservationError::ConflictRetryExhausted { attempts: 2 }));
    }

    #[tokio::test]
    async fn store_failures_are_not_retried() {
        let (client, mut store_rx) = create_mock_store(10);
        let reservations = service(&client, fast_retry(5));

        let order_task = tokio::spawn(async move {
            reservations.place_order(&student("12345"), &Cart::new().with("5", 1)).await
        });

        let (_, responder) = expect_get_order(&mut store_rx).await.expect("Expected GetOrder");
        responder.send(Ok(None)).unwrap();
        let (_, responder) = expect_get_item(&mut store_rx).await.expect("Expected GetItem");
        responder.send(Ok(Some(Versioned { version: 1, value: burger(0) }))).unwrap();
        let (_, _, responder) = expect_commit(&mut store_rx).await.expect("Expected Commit");
        let failure = StoreError::ActorCommunicationError("Store actor dropped".to_string());
        responder.send(Err(failure.clone())).unwrap();

        assert_eq!(order_task.await.unwrap(), Err(ReservationError::Store(failure)));
    }

    // -------------------------------------------------------------------------
    // Checkout sessions
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn committed_session_is_finished() {
        let store = start_store(vec![coffee(), burger(0)]).await;
        let reservations = service(&store, fast_retry(5));
        let menu = reservations.menu().await.unwrap();

        let mut session = CheckoutSession::start("12345").unwrap();
        for item in &menu {
            session.add_item(item).unwrap();
        }
        let order = session.submit(&reservations).await.unwrap();

        assert_eq!(session.state(), &CheckoutState::Committed(order.clone()));
        assert!(session.cart().is_empty());
        assert_eq!(order.total_items(), 2);
        assert_eq!(
            session.submit(&reservations).await,
            Err(ReservationError::AlreadyOrdered(order.id.clone()))
        );
        assert!(session.add_item(&menu[0]).is_err());
    }

    #[tokio::test]
    async fn rejected_session_keeps_cart_for_adjustment() {
        let store = start_store(vec![coffee(), burger(4)]).await;
        let reservations = service(&store, fast_retry(5));
        let menu = reservations.menu().await.unwrap();
        let listed_burger = menu.iter().find(|item| item.id.as_str() == "5").unwrap();

        let mut session = CheckoutSession::start("12345").unwrap();
        session.add_item(listed_burger).unwrap();

        // Another student takes the last burger first
        reservations
            .place_order(&student("54321"), &Cart::new().with("5", 1))
            .await
            .unwrap();

        let err = session.submit(&reservations).await.unwrap_err();
        assert!(matches!(err, ReservationError::InsufficientStock { .. }));
        assert_eq!(session.state(), &CheckoutState::Rejected(err));
        assert_eq!(session.cart().total_items(), 1);

        session.remove_item(&ItemId::from("5")).unwrap();
        session.add_item(&menu[0]).unwrap();
        assert_eq!(session.state(), &CheckoutState::Building);
        assert!(session.submit(&reservations).await.is_ok());
    }

    // -------------------------------------------------------------------------
    // Staff operations and the change feed
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn staff_toggle_blocks_and_unblocks_sales() {
        let store = start_store(vec![burger(1)]).await;
        let reservations = service(&store, fast_retry(5));
        let staff = StaffClient::new(store.clone(), fast_retry(5));

        let item = staff.set_sold_out(ItemId::from("5"), true).await.unwrap();
        assert!(item.manual_sold_out);
        assert_eq!(item.current_ordered, 1);
        let blocked = reservations.place_order(&student("111"), &Cart::new().with("5", 1)).await;
        assert!(matches!(blocked, Err(ReservationError::ManuallyDisabled { .. })));

        staff.set_sold_out(ItemId::from("5"), false).await.unwrap();
        assert!(reservations.place_order(&student("111"), &Cart::new().with("5", 1)).await.is_ok());
        assert_eq!(ordered(&store, "5").await, 2);
    }

    #[tokio::test]
    async fn staff_changes_to_the_current_value_leave_the_version_alone() {
        let store = start_store(vec![burger(1)]).await;
        let staff = StaffClient::new(store.clone(), fast_retry(5));
        let version = |doc: Option<Versioned<MenuItem>>| doc.unwrap().version;

        let before = version(store.get_item(ItemId::from("5")).await.unwrap());
        staff.set_sold_out(ItemId::from("5"), false).await.unwrap();
        staff.update_price(ItemId::from("5"), 8.0).await.unwrap();
        assert_eq!(version(store.get_item(ItemId::from("5")).await.unwrap()), before);

        staff.set_sold_out(ItemId::from("5"), true).await.unwrap();
        assert_eq!(version(store.get_item(ItemId::from("5")).await.unwrap()), before + 1);
    }

    #[tokio::test]
    async fn staff_errors_are_reported() {
        let store = start_store(vec![coffee()]).await;
        let staff = StaffClient::new(store.clone(), fast_retry(5));

        assert_eq!(
            staff.set_sold_out(ItemId::from("42"), true).await,
            Err(crate::staff::StaffError::ItemNotFound(ItemId::from("42")))
        );
        assert!(matches!(
            staff.update_price(ItemId::from("1"), -1.0).await,
            Err(crate::staff::StaffError::InvalidPrice(_))
        ));
    }

    #[tokio::test]
    async fn live_orders_stream_sees_new_orders() {
        let store = start_store(vec![coffee()]).await;
        let reservations = service(&store, fast_retry(5));
        let staff = StaffClient::new(store.clone(), fast_retry(5));

        let live = staff.live_orders();
        tokio::pin!(live);

        let placed = reservations
            .place_order(&student("12345"), &Cart::new().with("1", 1))
            .await
            .unwrap();

        let seen = tokio::time::timeout(Duration::from_secs(1), live.next())
            .await
            .expect("no order event")
            .expect("feed closed");
        assert_eq!(seen, placed);
    }

    #[tokio::test]
    async fn summary_and_end_of_day_reset() {
        let store = start_store(vec![coffee(), burger(0)]).await;
        let reservations = service(&store, fast_retry(5));
        let staff = StaffClient::new(store.clone(), fast_retry(5));

        reservations
            .place_order(&student("111"), &Cart::new().with("5", 2).with("1", 1))
            .await
            .unwrap();
        reservations.place_order(&student("222"), &Cart::new().with("5", 1)).await.unwrap();
        staff.set_sold_out(ItemId::from("1"), true).await.unwrap();

        let summary = staff.daily_summary(today()).await.unwrap();
        assert_eq!(summary.total_orders, 2);
        assert_eq!(summary.total_revenue, 27.0);
        assert_eq!(summary.top_items[0].name, "Chicken Burger");
        assert_eq!(summary.top_items[0].quantity, 3);

        let report = staff.end_of_day_reset().await.unwrap();
        assert_eq!(report.orders_purged, 2);
        assert_eq!(report.items_reset, 2);

        for item in staff.stock_overview().await.unwrap() {
            assert_eq!(item.current_ordered, 0);
            assert!(!item.manual_sold_out);
        }
        assert_eq!(staff.daily_summary(today()).await.unwrap().total_orders, 0);
        assert!(reservations.place_order(&student("111"), &Cart::new().with("5", 5)).await.is_ok());
    }

    // -------------------------------------------------------------------------
    // Whole system
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn system_starts_seeds_and_shuts_down() {
        let config = CanteenConfig {
            ordering_window: None,
            ..CanteenConfig::default()
        };
        let system = CanteenSystem::start(&config, Arc::new(FixedClock(ten_am())));
        assert_eq!(system.seed_menu(default_menu()).await.unwrap(), 6);
        assert!(system.seed_menu(vec![coffee()]).await.is_err());

        let order = system
            .reservations
            .place_order(&student("12345"), &Cart::new().with("5", 1).with("4", 2))
            .await
            .unwrap();
        assert_eq!(order.total_price, 17.0);

        let donut = system
            .reservations
            .place_order(&student("54321"), &Cart::new().with("3", 1))
            .await;
        assert!(matches!(donut, Err(ReservationError::ManuallyDisabled { .. })));

        system.shutdown().await.unwrap();
    }
}
