use crate::WhoisServer;

/// Built-in registry list used when the configuration names no servers.
pub fn default_servers() -> Vec<WhoisServer> {
    vec![
        WhoisServer::new("com", "whois.verisign-grs.com"),
        WhoisServer::new("net", "whois.verisign-grs.com"),
        WhoisServer::new("cc", "ccwhois.verisign-grs.com"),
        WhoisServer::new("tv", "tvwhois.verisign-grs.com"),
        WhoisServer::new("org", "whois.publicinterestregistry.org").centralized(),
        WhoisServer::new("info", "whois.nic.info").centralized(),
        WhoisServer::new("biz", "whois.nic.biz").centralized(),
        WhoisServer::new("io", "whois.nic.io").centralized(),
        WhoisServer::new("co", "whois.nic.co").centralized(),
        WhoisServer::new("me", "whois.nic.me").centralized(),
        WhoisServer::new("app", "whois.nic.google").centralized(),
        WhoisServer::new("dev", "whois.nic.google").centralized(),
        WhoisServer::new("edu", "whois.educause.edu").centralized(),
        WhoisServer::new("uk", "whois.nic.uk").centralized(),
        WhoisServer::new("co.uk", "whois.nic.uk").centralized(),
        WhoisServer::new("org.uk", "whois.nic.uk").centralized(),
        WhoisServer::new("de", "whois.denic.de")
            .centralized()
            .with_query_format("-T dn,ace %s\r\n"),
        WhoisServer::new("eu", "whois.eu").centralized(),
        WhoisServer::new("fr", "whois.nic.fr").centralized(),
        WhoisServer::new("nl", "whois.domain-registry.nl").centralized(),
        WhoisServer::new("ru", "whois.tcinet.ru").centralized(),
        WhoisServer::new("jp", "whois.jprs.jp")
            .centralized()
            .with_query_format("%s/e\r\n"),
    ]
}
