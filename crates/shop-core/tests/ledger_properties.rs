//! Property tests for the cart ledger.
//!
//! Random sequences of add/adjust/set/remove are applied both to a `Ledger`
//! and to a plain reference model; the two must agree after every step.

use proptest::prelude::*;

use shop_core::{Ledger, LineItem, Money, Pricing, QuantityChange};

#[derive(Debug, Clone)]
enum Op {
    Add { id: u8, price: i64, qty: i64 },
    Adjust { id: u8, delta: i64 },
    Set { id: u8, qty: i64 },
    Remove { id: u8 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    // A small id space so operations collide often.
    let id = 0u8..6;
    prop_oneof![
        (id.clone(), 0i64..50_000, -2i64..5)
            .prop_map(|(id, price, qty)| Op::Add { id, price, qty }),
        (id.clone(), -5i64..5).prop_map(|(id, delta)| Op::Adjust { id, delta }),
        (id.clone(), -3i64..10).prop_map(|(id, qty)| Op::Set { id, qty }),
        id.prop_map(|id| Op::Remove { id }),
    ]
}

/// Reference model: (id, unit price cents, quantity) in insertion order.
#[derive(Debug, Default)]
struct Model {
    rows: Vec<(String, i64, i64)>,
}

impl Model {
    fn apply(&mut self, op: &Op) {
        match *op {
            Op::Add { id, price, qty } => {
                let id = id.to_string();
                if qty <= 0 {
                    return;
                }
                match self.rows.iter_mut().find(|r| r.0 == id) {
                    Some(row) => row.2 += qty,
                    None => self.rows.push((id, price, qty)),
                }
            }
            Op::Adjust { id, delta } => self.store(&id.to_string(), |q| q + delta),
            Op::Set { id, qty } => self.store(&id.to_string(), |_| qty),
            Op::Remove { id } => {
                let id = id.to_string();
                self.rows.retain(|r| r.0 != id);
            }
        }
    }

    fn store(&mut self, id: &str, f: impl Fn(i64) -> i64) {
        if let Some(pos) = self.rows.iter().position(|r| r.0 == id) {
            let next = f(self.rows[pos].2).max(0);
            if next == 0 {
                self.rows.remove(pos);
            } else {
                self.rows[pos].2 = next;
            }
        }
    }

    fn subtotal(&self) -> i64 {
        self.rows.iter().map(|(_, price, qty)| price * qty).sum()
    }
}

fn apply(ledger: &mut Ledger, op: &Op) {
    match *op {
        Op::Add { id, price, qty } => {
            let item = LineItem::new(id.to_string(), format!("Item {id}"), Money::from_cents(price), qty);
            ledger.add_item(item).expect("generated items are valid");
        }
        Op::Adjust { id, delta } => {
            ledger.adjust_quantity(&id.to_string(), delta);
        }
        Op::Set { id, qty } => {
            ledger.set_quantity(&id.to_string(), qty);
        }
        Op::Remove { id } => {
            ledger.remove(&id.to_string());
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn stored_quantities_stay_positive(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut ledger = Ledger::new();
        for op in &ops {
            apply(&mut ledger, op);
            prop_assert!(ledger.items().iter().all(|i| i.quantity > 0));
        }
    }

    #[test]
    fn ledger_matches_reference_model(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut ledger = Ledger::new();
        let mut model = Model::default();

        for op in &ops {
            apply(&mut ledger, op);
            model.apply(op);

            let actual: Vec<(String, i64, i64)> = ledger
                .items()
                .iter()
                .map(|i| (i.id.clone(), i.unit_price.cents(), i.quantity))
                .collect();
            prop_assert_eq!(&actual, &model.rows);
        }

        let summary = ledger.summarize(&Pricing::default());
        prop_assert_eq!(summary.subtotal.cents(), model.subtotal());
        prop_assert_eq!(summary.item_count, model.rows.len());
        prop_assert_eq!(
            summary.total,
            summary.subtotal + summary.shipping + summary.tax
        );
    }

    #[test]
    fn remove_is_idempotent(
        ops in prop::collection::vec(op_strategy(), 0..40),
        target in 0u8..6,
    ) {
        let mut once = Ledger::new();
        for op in &ops {
            apply(&mut once, op);
        }
        let mut twice = once.clone();

        once.remove(&target.to_string());
        twice.remove(&target.to_string());
        twice.remove(&target.to_string());

        prop_assert_eq!(once.items(), twice.items());
    }

    #[test]
    fn adjusting_an_absent_id_changes_nothing(
        ops in prop::collection::vec(op_strategy(), 0..40),
        delta in -10i64..10,
    ) {
        let mut ledger = Ledger::new();
        for op in &ops {
            apply(&mut ledger, op);
        }
        let before = ledger.items().to_vec();

        prop_assert_eq!(ledger.adjust_quantity("absent", delta), QuantityChange::Absent);
        prop_assert_eq!(ledger.items(), before.as_slice());
    }

    #[test]
    fn unit_price_never_changes(
        price in 0i64..100_000,
        readd_price in 0i64..100_000,
        deltas in prop::collection::vec(-1i64..3, 0..30),
    ) {
        let mut ledger = Ledger::new();
        ledger.add_item(LineItem::new("p", "P", Money::from_cents(price), 1)).unwrap();

        for delta in deltas {
            if ledger.adjust_quantity("p", delta) == QuantityChange::Removed {
                return Ok(());
            }
            ledger.add_item(LineItem::new("p", "P", Money::from_cents(readd_price), 1)).unwrap();
            prop_assert_eq!(ledger.get("p").unwrap().unit_price.cents(), price);
        }
    }
}
