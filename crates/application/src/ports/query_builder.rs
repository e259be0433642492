use ferrous_whois_domain::QueryFormat;

pub trait QueryBuilder: Send + Sync {
    fn build_query(&self, domain: &str, strict: bool) -> String;
}

impl QueryBuilder for QueryFormat {
    fn build_query(&self, domain: &str, strict: bool) -> String {
        self.build(domain, strict)
    }
}
