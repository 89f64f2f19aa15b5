pub mod aggregate;

pub use aggregate::{
    open_orders, AttachEquipmentRequest, AttachMedicineRequest, CreateOrderRequest, CreatedOrder,
    Order, OrderDetails, OrderId, OrderLine, OrderStatus,
};
