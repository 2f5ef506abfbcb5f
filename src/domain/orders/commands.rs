use super::value_objects::Order;

#[derive(Debug, Clone)]
pub enum OrderCommand {
    /// Prepend a fully built order
    RecordOrder(Order),
    ClearOrders,
}
