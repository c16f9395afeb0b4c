//! Batch lifecycle controller.
//!
//! The controller drives entities through their state machines in sweeps:
//! poll a status registry, fetch each token's detail, derive the
//! transition request through the conversion pipeline, validate it
//! locally, and submit it. Each token is processed in isolation - one
//! order failing validation or being rejected remotely never stops the
//! rest of the batch - and every attempt lands in a [`BatchReport`] for
//! operator review.
//!
//! A poll failure aborts the sweep instead, since without the token list
//! there is no batch to work through.

use std::fmt;

use tradewinds_core::ValidationError;
use tradewinds_core::convert;
use tradewinds_core::entity::{CompleteReturnRequest, Order, OrderItem, OrderReturn, Refund, Shipment};
use tradewinds_core::ids::{AltIdSource, RandomAltIds};
use tradewinds_core::status::{OrderStatus, RefundReason, RefundStatus, ReturnStatus};
use tradewinds_core::types::{MarketDate, ShippingCarrier};

use crate::api::{OrderGateway, RefundGateway, ReturnGateway};
use crate::error::ApiError;

/// Which lifecycle entity an outcome concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// An order.
    Order,
    /// A return authorization.
    Return,
    /// A refund.
    Refund,
}

impl EntityKind {
    /// Lowercase label for logs and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Order => "order",
            Self::Return => "return",
            Self::Refund => "refund",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which transition a sweep attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Acknowledge a ready order.
    Acknowledge,
    /// Ship (or cancel) an acknowledged order.
    Ship,
    /// Complete a return.
    CompleteReturn,
    /// Create a merchant-initiated refund.
    CreateRefund,
    /// Check a settled status, no state change requested.
    StatusCheck,
}

impl Transition {
    /// Lowercase label for logs and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Acknowledge => "acknowledge",
            Self::Ship => "ship",
            Self::CompleteReturn => "complete return",
            Self::CreateRefund => "create refund",
            Self::StatusCheck => "status check",
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of one token's attempt within a sweep.
#[derive(Debug)]
pub struct TokenOutcome {
    /// Entity the token identifies.
    pub entity: EntityKind,
    /// The poll token.
    pub token: String,
    /// Transition that was attempted.
    pub transition: Transition,
    /// What happened.
    pub result: Result<(), ApiError>,
}

impl TokenOutcome {
    /// Whether the attempt succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

impl fmt::Display for TokenOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(()) => write!(f, "{} {}: {} ok", self.entity, self.token, self.transition),
            Err(e) => write!(
                f,
                "{} {}: {} failed: {e}",
                self.entity, self.token, self.transition
            ),
        }
    }
}

/// Per-token outcomes of one sweep.
#[derive(Debug, Default)]
pub struct BatchReport {
    outcomes: Vec<TokenOutcome>,
}

impl BatchReport {
    /// Every outcome, in processing order.
    #[must_use]
    pub fn outcomes(&self) -> &[TokenOutcome] {
        &self.outcomes
    }

    /// Outcomes that failed.
    pub fn failures(&self) -> impl Iterator<Item = &TokenOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    /// Outcomes that succeeded.
    pub fn successes(&self) -> impl Iterator<Item = &TokenOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    /// Whether every token in the sweep succeeded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.outcomes.iter().all(TokenOutcome::is_success)
    }

    fn record(
        &mut self,
        entity: EntityKind,
        transition: Transition,
        token: String,
        result: Result<(), ApiError>,
    ) {
        if let Err(e) = &result {
            tracing::warn!(%entity, %transition, %token, error = %e, "lifecycle transition failed");
        }
        self.outcomes.push(TokenOutcome {
            entity,
            token,
            transition,
            result,
        });
    }
}

/// Decides, per order, how each line splits between shipped and cancelled
/// quantity and which carrier/tracking pair the shipment travels under.
///
/// The controller validates whatever the planner decides: a split that
/// does not conserve the ordered quantity fails that order locally and
/// nothing is submitted for it.
pub trait ShipmentPlanner {
    /// `(shipped, cancelled)` for one order line. Defaults to shipping the
    /// full ordered quantity.
    fn split(&self, _order: &Order, item: &OrderItem) -> (u32, u32) {
        (item.quantity_ordered(), 0)
    }

    /// Carrier and tracking number, required whenever any line ships.
    fn tracking(&self, order: &Order) -> Option<(ShippingCarrier, String)>;
}

/// Planner that cancels every line of every order. Needs no carrier or
/// tracking data; the controller supplies the alternate shipment id.
#[derive(Debug, Clone, Copy, Default)]
pub struct CancelEverything;

impl ShipmentPlanner for CancelEverything {
    fn split(&self, _order: &Order, item: &OrderItem) -> (u32, u32) {
        (0, item.quantity_ordered())
    }

    fn tracking(&self, _order: &Order) -> Option<(ShippingCarrier, String)> {
        None
    }
}

/// Drives orders, returns, and refunds through their lifecycles in
/// batch sweeps.
///
/// Generic over the three gateways so sweeps run identically against the
/// live API or in-memory fakes, and over the [`AltIdSource`] so
/// cancel-only shipment ids are deterministic under test.
#[derive(Debug)]
pub struct LifecycleController<O, R, F, S = RandomAltIds> {
    orders: O,
    returns: R,
    refunds: F,
    alt_ids: S,
}

impl<O, R, F> LifecycleController<O, R, F> {
    /// A controller with random cancel-only shipment ids.
    #[must_use]
    pub fn new(orders: O, returns: R, refunds: F) -> Self {
        Self::with_alt_ids(orders, returns, refunds, RandomAltIds::new())
    }
}

impl<O, R, F, S> LifecycleController<O, R, F, S> {
    /// A controller with a caller-supplied alternate-id source.
    #[must_use]
    pub const fn with_alt_ids(orders: O, returns: R, refunds: F, alt_ids: S) -> Self {
        Self {
            orders,
            returns,
            refunds,
            alt_ids,
        }
    }
}

impl<O, R, F, S> LifecycleController<O, R, F, S>
where
    O: OrderGateway,
    R: ReturnGateway,
    F: RefundGateway,
    S: AltIdSource,
{
    /// Acknowledge every order currently in `Ready`: accepted overall,
    /// every line fulfillable at its ordered quantity.
    ///
    /// # Errors
    ///
    /// Returns an error only when the status poll itself fails; per-token
    /// failures land in the report.
    pub async fn acknowledge_ready_orders(&self) -> Result<BatchReport, ApiError> {
        let tokens = self.orders.poll(OrderStatus::Ready).await?;
        let mut report = BatchReport::default();
        for token in tokens {
            let result = self.acknowledge_one(&token).await;
            report.record(EntityKind::Order, Transition::Acknowledge, token, result);
        }
        Ok(report)
    }

    async fn acknowledge_one(&self, token: &str) -> Result<(), ApiError> {
        let order = self.orders.detail(token).await?;
        let ack = convert::acknowledgment_for(&order).build()?;
        self.orders.acknowledge(token, &ack).await
    }

    /// Ship every order currently in `Acknowledged`, splitting each line
    /// between shipped and cancelled quantity as the planner decides.
    ///
    /// An order whose every line is cancelled goes out as a cancel-only
    /// shipment under a fresh alternate shipment id; otherwise the
    /// planner must supply a carrier and tracking number.
    ///
    /// # Errors
    ///
    /// Returns an error only when the status poll itself fails; per-token
    /// failures land in the report.
    pub async fn ship_acknowledged_orders<P: ShipmentPlanner>(
        &mut self,
        planner: &P,
    ) -> Result<BatchReport, ApiError> {
        let tokens = self.orders.poll(OrderStatus::Acknowledged).await?;
        let mut report = BatchReport::default();
        for token in tokens {
            let result = self.ship_one(&token, planner).await;
            report.record(EntityKind::Order, Transition::Ship, token, result);
        }
        Ok(report)
    }

    async fn ship_one<P: ShipmentPlanner>(
        &mut self,
        token: &str,
        planner: &P,
    ) -> Result<(), ApiError> {
        let order = self.orders.detail(token).await?;

        let mut builder = Shipment::builder().ship_date(MarketDate::from_utc(chrono::Utc::now()));
        let mut any_shipped = false;
        for item in order.items() {
            let (shipped, cancelled) = planner.split(&order, item);
            any_shipped |= shipped > 0;
            builder = builder.item(convert::shipment_item(item).split(shipped, cancelled).build()?);
        }

        if any_shipped {
            let (carrier, tracking) = planner.tracking(&order).ok_or_else(|| {
                ValidationError::new(
                    "tracking_number",
                    "planner supplied no carrier/tracking for a shipping order",
                )
            })?;
            builder = builder.carrier(carrier).tracking_number(tracking);
        } else {
            builder = builder.alt_shipment_id(self.alt_ids.alt_shipment_id());
        }

        let shipment = builder.build()?;
        self.orders.ship(token, &shipment).await
    }

    /// Complete every return currently in `Created`, asking `decide` for
    /// the charge decision on each.
    ///
    /// The completion is re-validated locally via
    /// [`OrderReturn::completed`] before anything is submitted, so a
    /// return `decide` mishandles (or one that is already completed)
    /// fails closed.
    ///
    /// # Errors
    ///
    /// Returns an error only when the status poll itself fails; per-token
    /// failures land in the report.
    pub async fn complete_created_returns<D>(&self, decide: D) -> Result<BatchReport, ApiError>
    where
        D: Fn(&OrderReturn) -> Result<CompleteReturnRequest, ValidationError>,
    {
        let tokens = self.returns.poll(ReturnStatus::Created).await?;
        let mut report = BatchReport::default();
        for token in tokens {
            let result = self.complete_one(&token, &decide).await;
            report.record(EntityKind::Return, Transition::CompleteReturn, token, result);
        }
        Ok(report)
    }

    async fn complete_one<D>(&self, token: &str, decide: &D) -> Result<(), ApiError>
    where
        D: Fn(&OrderReturn) -> Result<CompleteReturnRequest, ValidationError>,
    {
        let ret = self.returns.detail(token).await?;
        let request = decide(&ret)?;
        // Local dry run of the transition; nothing is sent if it fails.
        ret.completed(&request)?;
        self.returns.complete(token, &request).await
    }

    /// Fetch every refund that has settled (accepted or rejected) and
    /// report each one's final status.
    ///
    /// # Errors
    ///
    /// Returns an error only when a status poll itself fails; per-token
    /// failures land in the report.
    pub async fn poll_refund_outcomes(&self) -> Result<BatchReport, ApiError> {
        let mut report = BatchReport::default();
        for status in [RefundStatus::Accepted, RefundStatus::Rejected] {
            let tokens = self.refunds.poll(status).await?;
            for token in tokens {
                let result = self.refunds.detail(&token).await.map(|refund| {
                    tracing::info!(%token, status = %refund.status(), "refund settled");
                });
                report.record(EntityKind::Refund, Transition::StatusCheck, token, result);
            }
        }
        Ok(report)
    }

    /// Create a merchant-initiated refund covering every line of the
    /// order behind `token`, each at its full ordered quantity and line
    /// total, all under one reason.
    ///
    /// # Errors
    ///
    /// Returns an error if the order cannot be fetched, the refund fails
    /// validation, or the marketplace rejects it.
    pub async fn refund_order(&self, token: &str, reason: RefundReason) -> Result<Refund, ApiError> {
        let order = self.orders.detail(token).await?;

        let mut builder = convert::refund_for(&order);
        for item in order.items() {
            builder = builder.item(convert::refund_item(item).refund_reason(reason).build()?);
        }
        let refund = builder.build()?;

        self.refunds.create(order.merchant_order_id(), &refund).await?;
        Ok(refund)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use tradewinds_core::entity::{Acknowledgment, ReturnItem};
    use tradewinds_core::ids::SequentialAltIds;
    use tradewinds_core::status::{AckStatus, ChargeFeedback, ReturnFeedback};
    use tradewinds_core::types::Address;

    use super::*;

    fn destination() -> Address {
        Address::builder()
            .address1("42 Mercantile Way")
            .city("Harborton")
            .state("NY")
            .zip("10013")
            .build()
            .expect("address")
    }

    fn order_item(sku: &str, quantity: u32) -> OrderItem {
        OrderItem::builder()
            .order_item_id(format!("itm-{sku}"))
            .merchant_sku(sku)
            .quantity_ordered(quantity)
            .unit_price("24.99".parse().expect("price"))
            .build()
            .expect("item")
    }

    fn order(token: &str) -> Order {
        Order::builder()
            .order_token(token)
            .merchant_order_id(format!("mo-{token}"))
            .status(OrderStatus::Ready)
            .destination(destination())
            .order_total("74.97".parse().expect("total"))
            .item(order_item("SKU-A", 2))
            .item(order_item("SKU-B", 1))
            .build()
            .expect("order")
    }

    #[derive(Default)]
    struct FakeOrders {
        orders: BTreeMap<String, Order>,
        acks: Mutex<Vec<(String, Acknowledgment)>>,
        shipments: Mutex<Vec<(String, Shipment)>>,
    }

    impl FakeOrders {
        fn with(tokens: &[&str]) -> Self {
            let mut fake = Self::default();
            for token in tokens {
                fake.orders.insert((*token).to_string(), order(token));
            }
            fake
        }
    }

    impl OrderGateway for &FakeOrders {
        async fn poll(&self, _status: OrderStatus) -> Result<Vec<String>, ApiError> {
            Ok(self.orders.keys().cloned().collect())
        }

        async fn detail(&self, token: &str) -> Result<Order, ApiError> {
            self.orders
                .get(token)
                .cloned()
                .ok_or_else(|| ApiError::NotFound(token.to_string()))
        }

        async fn acknowledge(&self, token: &str, ack: &Acknowledgment) -> Result<(), ApiError> {
            self.acks
                .lock()
                .expect("lock")
                .push((token.to_string(), ack.clone()));
            Ok(())
        }

        async fn ship(&self, token: &str, shipment: &Shipment) -> Result<(), ApiError> {
            self.shipments
                .lock()
                .expect("lock")
                .push((token.to_string(), shipment.clone()));
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeReturns {
        returns: BTreeMap<String, OrderReturn>,
        completions: Mutex<Vec<(String, CompleteReturnRequest)>>,
    }

    impl ReturnGateway for &FakeReturns {
        async fn poll(&self, _status: ReturnStatus) -> Result<Vec<String>, ApiError> {
            Ok(self.returns.keys().cloned().collect())
        }

        async fn detail(&self, token: &str) -> Result<OrderReturn, ApiError> {
            self.returns
                .get(token)
                .cloned()
                .ok_or_else(|| ApiError::NotFound(token.to_string()))
        }

        async fn complete(
            &self,
            token: &str,
            request: &CompleteReturnRequest,
        ) -> Result<(), ApiError> {
            self.completions
                .lock()
                .expect("lock")
                .push((token.to_string(), request.clone()));
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeRefunds {
        settled: BTreeMap<String, Refund>,
        created: Mutex<Vec<(String, Refund)>>,
    }

    impl RefundGateway for &FakeRefunds {
        async fn poll(&self, status: RefundStatus) -> Result<Vec<String>, ApiError> {
            Ok(self
                .settled
                .iter()
                .filter(|(_, r)| r.status() == status)
                .map(|(token, _)| token.clone())
                .collect())
        }

        async fn detail(&self, token: &str) -> Result<Refund, ApiError> {
            self.settled
                .get(token)
                .cloned()
                .ok_or_else(|| ApiError::NotFound(token.to_string()))
        }

        async fn create(&self, merchant_order_id: &str, refund: &Refund) -> Result<(), ApiError> {
            self.created
                .lock()
                .expect("lock")
                .push((merchant_order_id.to_string(), refund.clone()));
            Ok(())
        }
    }

    /// Ships everything under a fixed carrier/tracking pair, except that
    /// orders listed in `misplan` get a split that loses one unit.
    struct TestPlanner {
        misplan: Vec<String>,
    }

    impl ShipmentPlanner for TestPlanner {
        fn split(&self, order: &Order, item: &OrderItem) -> (u32, u32) {
            if self.misplan.iter().any(|t| t == order.order_token()) {
                (0, 0)
            } else {
                (item.quantity_ordered(), 0)
            }
        }

        fn tracking(&self, _order: &Order) -> Option<(ShippingCarrier, String)> {
            Some((ShippingCarrier::Ups, "1Z999AA10123456784".to_string()))
        }
    }

    fn controller<'a>(
        orders: &'a FakeOrders,
        returns: &'a FakeReturns,
        refunds: &'a FakeRefunds,
    ) -> LifecycleController<&'a FakeOrders, &'a FakeReturns, &'a FakeRefunds, SequentialAltIds>
    {
        LifecycleController::with_alt_ids(
            orders,
            returns,
            refunds,
            SequentialAltIds::new("CNCL-TEST"),
        )
    }

    #[tokio::test]
    async fn test_acknowledge_sweep_covers_every_ready_order() {
        let orders = FakeOrders::with(&["tok-1", "tok-2"]);
        let returns = FakeReturns::default();
        let refunds = FakeRefunds::default();
        let controller = controller(&orders, &returns, &refunds);

        let report = controller.acknowledge_ready_orders().await.expect("sweep");
        assert!(report.is_clean());
        assert_eq!(report.outcomes().len(), 2);

        let acks = orders.acks.lock().expect("lock");
        assert_eq!(acks.len(), 2);
        let (token, ack) = acks.first().expect("ack");
        assert_eq!(token, "tok-1");
        assert_eq!(ack.status(), AckStatus::Accepted);
        assert_eq!(ack.items().len(), 2);
    }

    #[tokio::test]
    async fn test_one_bad_order_does_not_stop_the_sweep() {
        let orders = FakeOrders::with(&["tok-1", "tok-2", "tok-3"]);
        let returns = FakeReturns::default();
        let refunds = FakeRefunds::default();
        let mut controller = controller(&orders, &returns, &refunds);

        let planner = TestPlanner {
            misplan: vec!["tok-2".to_string()],
        };
        let report = controller
            .ship_acknowledged_orders(&planner)
            .await
            .expect("sweep");

        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        let failure = failures.first().expect("failure");
        assert_eq!(failure.token, "tok-2");
        assert!(matches!(failure.result, Err(ApiError::Validation(_))));

        // The other two orders still shipped.
        let shipments = orders.shipments.lock().expect("lock");
        let shipped_tokens: Vec<_> = shipments.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(shipped_tokens, ["tok-1", "tok-3"]);
    }

    #[tokio::test]
    async fn test_cancel_only_shipment_draws_alternate_id() {
        let orders = FakeOrders::with(&["tok-1"]);
        let returns = FakeReturns::default();
        let refunds = FakeRefunds::default();
        let mut controller = controller(&orders, &returns, &refunds);

        let report = controller
            .ship_acknowledged_orders(&CancelEverything)
            .await
            .expect("sweep");
        assert!(report.is_clean());

        let shipments = orders.shipments.lock().expect("lock");
        let (_, shipment) = shipments.first().expect("shipment");
        assert!(shipment.is_cancel_only());
        assert_eq!(shipment.alt_shipment_id(), Some("CNCL-TEST-1"));
        assert!(shipment.carrier().is_none());
    }

    fn pending_return(token: &str, status: ReturnStatus) -> OrderReturn {
        OrderReturn::builder()
            .return_auth_id(token)
            .merchant_order_id("mo-1")
            .status(status)
            .item(
                ReturnItem::builder()
                    .merchant_sku("SKU-A")
                    .quantity(1)
                    .feedback(ReturnFeedback::ItemDamaged)
                    .build()
                    .expect("item"),
            )
            .build()
            .expect("return")
    }

    #[tokio::test]
    async fn test_return_completion_fails_closed() {
        let orders = FakeOrders::default();
        let mut returns = FakeReturns::default();
        // ra-1 is legitimately open; ra-2 is already completed and must
        // not be submitted again.
        returns
            .returns
            .insert("ra-1".to_string(), pending_return("ra-1", ReturnStatus::Created));
        returns
            .returns
            .insert("ra-2".to_string(), pending_return("ra-2", ReturnStatus::Completed));
        let refunds = FakeRefunds::default();
        let controller = controller(&orders, &returns, &refunds);

        let report = controller
            .complete_created_returns(|_| {
                CompleteReturnRequest::builder()
                    .agree_to_return_charge(false)
                    .charge_feedback(ChargeFeedback::NotMerchantsError)
                    .build()
            })
            .await
            .expect("sweep");

        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures.first().expect("failure").token, "ra-2");

        let completions = returns.completions.lock().expect("lock");
        assert_eq!(completions.len(), 1);
        assert_eq!(completions.first().expect("completion").0, "ra-1");
    }

    #[tokio::test]
    async fn test_refund_order_covers_every_line() {
        let orders = FakeOrders::with(&["tok-1"]);
        let returns = FakeReturns::default();
        let refunds = FakeRefunds::default();
        let controller = controller(&orders, &returns, &refunds);

        let refund = controller
            .refund_order("tok-1", RefundReason::ItemDefective)
            .await
            .expect("refund");
        assert_eq!(refund.items().len(), 2);

        let created = refunds.created.lock().expect("lock");
        let (merchant_order_id, submitted) = created.first().expect("created");
        assert_eq!(merchant_order_id, "mo-tok-1");
        let first = submitted.items().first().expect("item");
        assert_eq!(first.refund_reason(), RefundReason::ItemDefective);
        // 2 * 24.99 itemized by the conversion pipeline.
        assert_eq!(first.refund_amount().expect("amount").to_string(), "49.98");
    }

    #[tokio::test]
    async fn test_settled_refunds_are_reported() {
        let orders = FakeOrders::default();
        let returns = FakeReturns::default();
        let mut refunds = FakeRefunds::default();
        let accepted = Refund::builder()
            .refund_id("rf-1")
            .merchant_order_id("mo-1")
            .status(RefundStatus::Accepted)
            .item(
                tradewinds_core::entity::RefundItem::builder()
                    .order_item_id("itm-1")
                    .merchant_sku("SKU-A")
                    .quantity(1)
                    .refund_reason(RefundReason::Other)
                    .build()
                    .expect("item"),
            )
            .build()
            .expect("refund");
        let mut rejected = Refund::builder()
            .refund_id("rf-2")
            .merchant_order_id("mo-2")
            .status(RefundStatus::Rejected);
        rejected = rejected.item(
            tradewinds_core::entity::RefundItem::builder()
                .order_item_id("itm-2")
                .merchant_sku("SKU-B")
                .quantity(1)
                .refund_reason(RefundReason::Other)
                .build()
                .expect("item"),
        );
        refunds.settled.insert("rf-1".to_string(), accepted);
        refunds
            .settled
            .insert("rf-2".to_string(), rejected.build().expect("refund"));
        let controller = controller(&orders, &returns, &refunds);

        let report = controller.poll_refund_outcomes().await.expect("sweep");
        assert!(report.is_clean());
        assert_eq!(report.outcomes().len(), 2);
        assert!(
            report
                .outcomes()
                .iter()
                .all(|o| o.transition == Transition::StatusCheck)
        );
    }

    #[tokio::test]
    async fn test_poll_failure_aborts_the_sweep() {
        struct BrokenOrders;

        impl OrderGateway for BrokenOrders {
            async fn poll(&self, _status: OrderStatus) -> Result<Vec<String>, ApiError> {
                Err(ApiError::NotFound("registry".to_string()))
            }

            async fn detail(&self, token: &str) -> Result<Order, ApiError> {
                Err(ApiError::NotFound(token.to_string()))
            }

            async fn acknowledge(
                &self,
                _token: &str,
                _ack: &Acknowledgment,
            ) -> Result<(), ApiError> {
                Ok(())
            }

            async fn ship(&self, _token: &str, _shipment: &Shipment) -> Result<(), ApiError> {
                Ok(())
            }
        }

        let returns = FakeReturns::default();
        let refunds = FakeRefunds::default();
        let controller = LifecycleController::with_alt_ids(
            BrokenOrders,
            &returns,
            &refunds,
            SequentialAltIds::new("CNCL-TEST"),
        );
        assert!(controller.acknowledge_ready_orders().await.is_err());
    }
}
