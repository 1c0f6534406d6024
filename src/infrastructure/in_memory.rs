use crate::domain::ports::{
    PaymentDeclined, PaymentService, ReservationFailed, Seat, SeatReservationService,
};
use crate::domain::ticket::AccountId;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use tokio::sync::RwLock;

/// In-process payment gateway.
///
/// Records every payment it accepts. Accounts seeded with a balance are
/// checked and debited; unknown accounts are accepted without a funds check,
/// which keeps the funds boundary entirely on this side of the port.
/// Cloning shares the underlying state, so a test or host can keep a handle
/// while the service owns a boxed clone.
#[derive(Default, Clone)]
pub struct InMemoryPaymentGateway {
    balances: Arc<RwLock<HashMap<AccountId, Decimal>>>,
    payments: Arc<RwLock<Vec<(AccountId, Decimal)>>>,
}

impl InMemoryPaymentGateway {
    /// Creates a gateway that accepts every payment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an account with an opening balance. Payments from seeded
    /// accounts are declined with "insufficient funds" when they exceed it.
    pub async fn seed_account(&self, account: AccountId, balance: Decimal) {
        self.balances.write().await.insert(account, balance);
    }

    /// All payments accepted so far, in order.
    pub async fn payments(&self) -> Vec<(AccountId, Decimal)> {
        self.payments.read().await.clone()
    }

    /// Remaining balance of a seeded account.
    pub async fn balance(&self, account: AccountId) -> Option<Decimal> {
        self.balances.read().await.get(&account).copied()
    }
}

#[async_trait]
impl PaymentService for InMemoryPaymentGateway {
    async fn make_payment(
        &self,
        amount: Decimal,
        account: AccountId,
    ) -> Result<(), PaymentDeclined> {
        let mut balances = self.balances.write().await;
        if let Some(balance) = balances.get_mut(&account) {
            if *balance < amount {
                return Err(PaymentDeclined::new(format!(
                    "insufficient funds: balance {balance}, charge {amount}"
                )));
            }
            *balance -= amount;
        }
        self.payments.write().await.push((account, amount));
        Ok(())
    }
}

/// In-process seat reservation that hands out monotonically numbered seats,
/// optionally bounded by an auditorium capacity.
#[derive(Default, Clone)]
pub struct InMemorySeatAllocator {
    next: Arc<AtomicU32>,
    capacity: Option<u32>,
}

impl InMemorySeatAllocator {
    /// Unlimited seating.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seating bounded at `capacity`; further reservations fail.
    pub fn with_capacity(capacity: u32) -> Self {
        Self {
            next: Arc::new(AtomicU32::new(0)),
            capacity: Some(capacity),
        }
    }

    /// Seats handed out so far.
    pub fn reserved(&self) -> u32 {
        self.next.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SeatReservationService for InMemorySeatAllocator {
    async fn reserve_seat(&self) -> Result<Seat, ReservationFailed> {
        let seat = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(capacity) = self.capacity
            && seat > capacity
        {
            return Err(ReservationFailed::new("auditorium is sold out"));
        }
        Ok(Seat(seat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_gateway_accepts_unseeded_accounts() {
        let gateway = InMemoryPaymentGateway::new();
        gateway
            .make_payment(dec!(50), AccountId(1))
            .await
            .unwrap();
        assert_eq!(gateway.payments().await, vec![(AccountId(1), dec!(50))]);
    }

    #[tokio::test]
    async fn test_gateway_debits_seeded_account() {
        let gateway = InMemoryPaymentGateway::new();
        gateway.seed_account(AccountId(1), dec!(100)).await;

        gateway
            .make_payment(dec!(30), AccountId(1))
            .await
            .unwrap();
        assert_eq!(gateway.balance(AccountId(1)).await, Some(dec!(70)));
    }

    #[tokio::test]
    async fn test_gateway_declines_insufficient_funds() {
        let gateway = InMemoryPaymentGateway::new();
        gateway.seed_account(AccountId(1), dec!(10)).await;

        let result = gateway.make_payment(dec!(30), AccountId(1)).await;
        let err = result.unwrap_err();
        assert!(err.reason.contains("insufficient funds"));

        // Declined payments are neither recorded nor debited.
        assert!(gateway.payments().await.is_empty());
        assert_eq!(gateway.balance(AccountId(1)).await, Some(dec!(10)));
    }

    #[tokio::test]
    async fn test_allocator_numbers_seats_sequentially() {
        let allocator = InMemorySeatAllocator::new();
        assert_eq!(allocator.reserve_seat().await.unwrap(), Seat(1));
        assert_eq!(allocator.reserve_seat().await.unwrap(), Seat(2));
        assert_eq!(allocator.reserved(), 2);
    }

    #[tokio::test]
    async fn test_allocator_respects_capacity() {
        let allocator = InMemorySeatAllocator::with_capacity(1);
        allocator.reserve_seat().await.unwrap();
        let err = allocator.reserve_seat().await.unwrap_err();
        assert!(err.reason.contains("sold out"));
    }
}
