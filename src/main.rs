use std::sync::Arc;

use canteen::app_system::{default_menu, load_menu, setup_tracing, CanteenConfig, CanteenSystem, SystemError};
use canteen::clock::{Clock, SystemClock};
use canteen::domain::ItemId;
use canteen::reservation::{CheckoutSession, ReservationError};
use tokio_stream::StreamExt;
use tracing::{error, info, warn, Instrument};

const BURGER: &str = "5";
const COFFEE: &str = "1";

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    setup_tracing();

    info!("Starting canteen demo");

    let config = CanteenConfig::load()?;
    let menu = match &config.menu_path {
        Some(path) => load_menu(path)?,
        None => default_menu(),
    };
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let system = CanteenSystem::start(&config, clock.clone());
    system.seed_menu(menu).await?;

    // Staff live-orders board
    let live_orders = system.staff.live_orders();
    let board = tokio::spawn(
        async move {
            tokio::pin!(live_orders);
            while let Some(order) = live_orders.next().await {
                let items = order
                    .lines
                    .iter()
                    .map(|line| format!("{} (x{})", line.name, line.quantity))
                    .collect::<Vec<_>>()
                    .join(", ");
                info!(order_id = %order.id, student = %order.student, total = order.total_price, %items, "New order");
            }
        }
        .instrument(tracing::info_span!("live_orders")),
    );

    // Lunch rush: more students want a burger than there are burgers
    let mut rush = Vec::new();
    for (n, gr) in ["1001", "1002", "1003", "1004", "1005", "1006", "1007", "1008"]
        .into_iter()
        .enumerate()
    {
        let reservations = system.reservations.clone();
        let span = tracing::info_span!("student", gr);
        rush.push(tokio::spawn(
            async move {
                let mut session = CheckoutSession::start(gr)?;
                let menu = reservations.menu().await?;
                for item in &menu {
                    let wanted = item.id.as_str() == BURGER || (n % 2 == 0 && item.id.as_str() == COFFEE);
                    if wanted {
                        if let Err(e) = session.add_item(item) {
                            warn!(error = %e, "Could not add item to cart");
                        }
                    }
                }
                let order = session.submit(&reservations).await?;
                Ok::<_, ReservationError>(order)
            }
            .instrument(span),
        ));
    }

    for task in rush {
        match task.await {
            Ok(Ok(order)) => info!(order_id = %order.id, "Student order confirmed"),
            Ok(Err(e)) => warn!(error = %e, "Student order rejected"),
            Err(e) => error!(error = ?e, "Student task failed"),
        }
    }

    // Coffee machine breaks down
    let coffee = system.staff.set_sold_out(ItemId::from(COFFEE), true).await;
    if let Err(e) = &coffee {
        error!(error = %e, "Could not mark coffee as sold out");
    }

    let late = async {
        let mut session = CheckoutSession::start("2001")?;
        let menu = system.reservations.menu().await?;
        for item in menu.iter().filter(|item| item.id.as_str() == COFFEE) {
            if let Err(e) = session.add_item(item) {
                warn!(error = %e, "Could not add item to cart");
            }
        }
        Ok::<_, ReservationError>(session.cart().total_items())
    }
    .instrument(tracing::info_span!("student", gr = "2001"))
    .await;
    match late {
        Ok(items) => info!(items, "Late student cart"),
        Err(e) => warn!(error = %e, "Late student could not start"),
    }

    for item in system.staff.stock_overview().await? {
        info!(
            item = %item.name,
            ordered = item.current_ordered,
            limit = item.total_limit,
            manual_sold_out = item.manual_sold_out,
            "Stock"
        );
    }

    let summary = system.staff.daily_summary(clock.now().date_naive()).await;
    match summary {
        Ok(summary) => {
            info!(
                orders = summary.total_orders,
                revenue = summary.total_revenue,
                "Daily summary"
            );
            for sales in &summary.top_items {
                info!(item = %sales.name, quantity = sales.quantity, "Sold");
            }
        }
        Err(e) => error!(error = %e, "Could not build daily summary"),
    }

    match system.staff.end_of_day_reset().await {
        Ok(report) => info!(orders_purged = report.orders_purged, "Day closed"),
        Err(e) => error!(error = %e, "End-of-day reset failed"),
    }

    board.abort();
    system.shutdown().await?;

    info!("Canteen demo completed");
    Ok(())
}
