use shared_types::Company;

pub fn company(id: i64, name: &str) -> Company {
    Company {
        id,
        name: name.to_string(),
        industry: "Software".to_string(),
        country: "India".to_string(),
        state: "Karnataka".to_string(),
        city: "Bengaluru".to_string(),
        postal_code: "560001".to_string(),
        employee_count: 100,
        founded: 2010,
        tagline: String::new(),
    }
}

pub fn located(
    id: i64,
    name: &str,
    industry: &str,
    country: &str,
    state: &str,
    city: &str,
    postal_code: &str,
    employee_count: u32,
) -> Company {
    Company {
        id,
        name: name.to_string(),
        industry: industry.to_string(),
        country: country.to_string(),
        state: state.to_string(),
        city: city.to_string(),
        postal_code: postal_code.to_string(),
        employee_count,
        founded: 2015,
        tagline: String::new(),
    }
}

/// A small mixed dataset spanning three countries.
pub fn directory() -> Vec<Company> {
    vec![
        located(1, "Northwind Labs", "Fintech", "India", "Karnataka", "Bengaluru", "560001", 420),
        located(2, "Acme Robotics", "Robotics", "United States", "California", "San Jose", "95113", 1200),
        located(3, "bluefin analytics", "Software", "India", "Maharashtra", "Pune", "411001", 85),
        located(4, "Contoso Health", "Healthcare", "Germany", "Bavaria", "Munich", "80331", 640),
        located(5, "Delta Freight", "Logistics", "United States", "Texas", "Austin", "73301", 310),
        located(6, "Everleaf", "Software", "India", "Karnataka", "Mysuru", "570001", 42),
        located(7, "Fabrikam Pay", "Fintech", "Germany", "Berlin", "Berlin", "10115", 2300),
        located(8, "Granite Systems", "Software", "United States", "California", "San Francisco", "94105", 980),
    ]
}
