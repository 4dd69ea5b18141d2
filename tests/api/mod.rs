mod test_health;
mod test_info;
mod test_nested;
mod test_queries;
