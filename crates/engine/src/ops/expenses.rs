//! Expense operations.
//!
//! The split detail is computed here and stored alongside the expense; it is
//! recomputed on every update that touches the amount, policy, or
//! participant set (in practice: every update).

use crate::{
    EngineError, ExpenseCmd, ResultEngine, dates,
    expenses::{Expense, ExpenseId},
    split::{self, SplitDetail},
};

use super::PlanningSession;

impl PlanningSession {
    /// Adds an expense under an existing destination.
    ///
    /// The optional itinerary-entry link must point at an entry of the same
    /// destination. The split is computed before anything is stored, so a
    /// split failure leaves the session untouched.
    pub fn add_expense(&mut self, cmd: ExpenseCmd) -> ResultEngine<&Expense> {
        let split = self.validate_expense(&cmd)?;

        let id = self.alloc_expense_id();
        let expense = Expense {
            id,
            destination_id: cmd.destination_id,
            itinerary_entry_id: cmd.itinerary_entry_id,
            amount: cmd.amount,
            date: cmd.date,
            category: cmd.category,
            payer_id: cmd.payer_id,
            policy: cmd.policy,
            participants: cmd.participants,
            split,
        };
        tracing::debug!(
            "expense {id} added: {} split {} ways",
            expense.amount,
            expense.split.shares.len()
        );
        self.expenses.insert(id, expense);
        self.set_preferred_split_policy(cmd.policy);

        self.expense(id)
    }

    /// Replaces an expense's data and recomputes its split.
    ///
    /// Expenses are never reparented; the command must target the expense's
    /// current destination.
    pub fn update_expense(&mut self, id: ExpenseId, cmd: ExpenseCmd) -> ResultEngine<&Expense> {
        let current = self.expense(id)?;
        if current.destination_id != cmd.destination_id {
            return Err(EngineError::InvalidOperation(
                "expenses cannot move between destinations".to_string(),
            ));
        }
        let split = self.validate_expense(&cmd)?;

        let expense = self
            .expenses
            .get_mut(&id)
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))?;
        expense.itinerary_entry_id = cmd.itinerary_entry_id;
        expense.amount = cmd.amount;
        expense.date = cmd.date;
        expense.category = cmd.category;
        expense.payer_id = cmd.payer_id;
        expense.policy = cmd.policy;
        expense.participants = cmd.participants;
        expense.split = split;
        tracing::debug!("expense {id} updated, split recomputed");

        self.expense(id)
    }

    /// Removes an expense.
    pub fn remove_expense(&mut self, id: ExpenseId) -> ResultEngine<()> {
        if self.expenses.remove(&id).is_none() {
            return Err(EngineError::KeyNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Runs every fatal check for an expense command and returns the
    /// computed split. No session state is touched.
    fn validate_expense(&self, cmd: &ExpenseCmd) -> ResultEngine<SplitDetail> {
        let destination = self.destination(cmd.destination_id)?;
        dates::validate_within(cmd.date, destination.start_date, destination.end_date)?;

        if let Some(entry_id) = cmd.itinerary_entry_id {
            let entry = self.entry(entry_id)?;
            if entry.destination_id != cmd.destination_id {
                return Err(EngineError::InvalidOperation(
                    "linked itinerary entry belongs to another destination".to_string(),
                ));
            }
        }

        let split = split::compute_split(cmd.amount, cmd.policy, &cmd.participants, cmd.payer_id)?;
        Ok(split)
    }
}
