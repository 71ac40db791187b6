use tracing::{debug, instrument};

use super::{ReservationError, ReservationService};
use crate::domain::{Availability, Cart, ItemId, MenuItem, Order, StudentId};

/// Where a student's checkout stands.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutState {
    /// The cart is being edited.
    Building,
    /// An order attempt is in flight.
    Pending,
    Committed(Order),
    /// The last attempt failed; the cart is kept so it can be adjusted.
    Rejected(ReservationError),
}

/// Request-scoped state of one student building and submitting a cart.
///
/// `submit` borrows the session mutably for the whole attempt, so a second
/// submission cannot start while one is pending.
#[derive(Debug)]
pub struct CheckoutSession {
    student: StudentId,
    cart: Cart,
    state: CheckoutState,
}

impl CheckoutSession {
    /// Starts a session for a GR number (3 to 6 digits).
    pub fn start(gr_number: &str) -> Result<Self, ReservationError> {
        let student = StudentId::parse(gr_number)
            .ok_or_else(|| ReservationError::InvalidIdentity(gr_number.to_string()))?;
        Ok(Self::for_student(student))
    }

    pub fn for_student(student: StudentId) -> Self {
        Self {
            student,
            cart: Cart::new(),
            state: CheckoutState::Building,
        }
    }

    pub fn student(&self) -> &StudentId {
        &self.student
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// Adds one unit of `item` as last seen on the menu.
    ///
    /// Refuses units beyond what the listing shows as remaining. This is only a
    /// hint for the student; the stock is checked again when the order is placed.
    pub fn add_item(&mut self, item: &MenuItem) -> Result<(), ReservationError> {
        self.ensure_editable()?;
        let in_cart = self.cart.quantity_of(&item.id);
        match item.availability() {
            Availability::Unavailable => {
                return Err(ReservationError::ManuallyDisabled {
                    item_id: item.id.clone(),
                    name: item.name.clone(),
                })
            }
            Availability::Available { remaining } if in_cart < remaining => {}
            _ => {
                return Err(ReservationError::InsufficientStock {
                    item_id: item.id.clone(),
                    name: item.name.clone(),
                    requested: in_cart + 1,
                    remaining: item.remaining(),
                })
            }
        }
        self.cart.add(item.id.clone(), 1);
        self.state = CheckoutState::Building;
        Ok(())
    }

    /// Removes one unit of `item_id` from the cart.
    pub fn remove_item(&mut self, item_id: &ItemId) -> Result<(), ReservationError> {
        self.ensure_editable()?;
        self.cart.remove_one(item_id);
        self.state = CheckoutState::Building;
        Ok(())
    }

    /// Places the cart as this student's order for today.
    ///
    /// On success the cart is emptied and the session is finished: later
    /// submissions fail with `AlreadyOrdered`. On failure the cart is untouched.
    #[instrument(fields(student = %self.student), skip_all)]
    pub async fn submit(&mut self, service: &ReservationService) -> Result<Order, ReservationError> {
        self.ensure_editable()?;

        self.state = CheckoutState::Pending;
        debug!(items = self.cart.total_items(), "Submitting cart");

        match service.place_order(&self.student, &self.cart).await {
            Ok(order) => {
                self.cart.clear();
                self.state = CheckoutState::Committed(order.clone());
                Ok(order)
            }
            Err(e) => {
                self.state = CheckoutState::Rejected(e.clone());
                Err(e)
            }
        }
    }

    fn ensure_editable(&self) -> Result<(), ReservationError> {
        match &self.state {
            CheckoutState::Committed(order) => Err(ReservationError::AlreadyOrdered(order.id.clone())),
            _ => Ok(()),
        }
    }
}
