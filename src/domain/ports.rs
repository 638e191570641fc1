use crate::domain::model::OrderId;

/// Supplies the cosmetic fields of seeded orders.
pub trait OrderGenerator {
    fn name(&mut self, id: OrderId) -> String;
    fn company_name(&mut self, id: OrderId) -> String;
    fn photo(&mut self, id: OrderId) -> String;
}

/// Receives the edit script of a list change, one operation at a time.
///
/// Positions refer to the list as it stands after every previously
/// dispatched operation.
pub trait ListUpdateCallback {
    fn on_removed(&mut self, position: usize);
    fn on_moved(&mut self, from: usize, to: usize);
    fn on_inserted(&mut self, position: usize);
    fn on_changed(&mut self, position: usize);
}
