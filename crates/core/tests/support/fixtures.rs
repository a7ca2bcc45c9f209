//! Record builders

use veggieworld_domain::{
    Customer, CustomerStatus, CustomerType, MemberStatus, Order, OrderSource, OrderStatus,
    PaymentStatus, Role, TeamMember,
};

pub fn order(id: &str, customer: &str) -> Order {
    Order {
        id: id.to_string(),
        customer: customer.to_string(),
        source: OrderSource::WhatsApp,
        amount: "₦12,500".to_string(),
        date: "2 mins ago".to_string(),
        status: OrderStatus::Processing,
        payment: PaymentStatus::Paid,
    }
}

pub fn customer(id: &str, name: &str, email: &str) -> Customer {
    Customer {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: "+234 803 123 4567".to_string(),
        orders: 3,
        total_spent: "₦36,000".to_string(),
        kind: CustomerType::B2c,
        status: CustomerStatus::Active,
    }
}

pub fn member(id: &str, name: &str, role: Role) -> TeamMember {
    TeamMember {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@veggieworld.ng", name.to_lowercase()),
        role,
        permissions: role.default_permissions(),
        status: MemberStatus::Active,
    }
}
