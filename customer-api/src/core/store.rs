//! In-memory record store
//!
//! Pure business logic with no I/O dependencies

use shared::Customer;

/// The authoritative ordered customer collection.
///
/// Order follows insertion; updates replace in place and deletes remove the
/// entry without reordering the rest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    customers: Vec<Customer>,
}

impl RecordStore {
    /// Create a store seeded with a previously persisted collection
    pub fn new(customers: Vec<Customer>) -> Self {
        Self { customers }
    }

    /// Current collection, in order
    pub fn snapshot(&self) -> &[Customer] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Index of the first record with `id`
    pub fn position(&self, id: i64) -> Option<usize> {
        self.customers.iter().position(|customer| customer.id == id)
    }

    /// First record with `id`
    pub fn find(&self, id: i64) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.id == id)
    }

    pub fn append(&mut self, customer: Customer) {
        self.customers.push(customer);
    }

    /// Replace the record at `index`, returning the previous value
    pub fn replace_at(&mut self, index: usize, customer: Customer) -> Option<Customer> {
        self.customers
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, customer))
    }

    /// Remove the record at `index`, shifting later records down
    pub fn remove_at(&mut self, index: usize) -> Option<Customer> {
        (index < self.customers.len()).then(|| self.customers.remove(index))
    }
}
