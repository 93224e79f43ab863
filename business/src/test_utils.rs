use crate::{Address, Company, UserRecord};

pub fn user(id: u64) -> UserRecord {
    UserRecord {
        id,
        name: format!("User {id}"),
        username: format!("user{id}"),
        email: format!("user{id}@example.com"),
        address: Some(Address {
            city: Some(format!("City {id}")),
        }),
        phone: format!("555-000-{id:04}"),
        website: format!("user{id}.example.com"),
        company: Some(Company {
            name: Some(format!("Company {id}")),
        }),
    }
}
