#![allow(dead_code)]

/// Thin registry answer pointing at the registrar's own server.
pub const VERISIGN_EXAMPLE_COM: &str = "   Domain Name: EXAMPLE.COM\r
   Registry Domain ID: 2336799_DOMAIN_COM-VRSN\r
   Registrar WHOIS Server: whois.iana.org\r
   Registrar URL: http://res-dom.iana.org\r
   Updated Date: 2024-08-14T07:01:34Z\r
   Creation Date: 1995-08-14T04:00:00Z\r
   Registry Expiry Date: 2025-08-13T04:00:00Z\r
   Registrar: RESERVED-Internet Assigned Numbers Authority\r
   Domain Status: clientDeleteProhibited https://icann.org/epp#clientDeleteProhibited\r
   Domain Status: clientTransferProhibited https://icann.org/epp#clientTransferProhibited\r
   Name Server: A.IANA-SERVERS.NET\r
   Name Server: B.IANA-SERVERS.NET\r
   DNSSEC: signedDelegation\r
>>> Last update of whois database: 2024-10-01T12:00:00Z <<<\r
";

pub const VERISIGN_NO_MATCH: &str = "No match for \"FREE-NAME-123.COM\".\r
>>> Last update of whois database: 2024-10-01T12:00:00Z <<<\r
";

/// Sectioned layout: keys on their own line, values indented below.
pub const NOMINET_EXAMPLE_CO_UK: &str = "
    Domain name:
        example.co.uk

    Registrant:
        Example Holdings Ltd

    Registrar:
        Nominet UK [Tag = NOMINET]
        URL: https://www.nominet.uk

    Relevant dates:
        Registered on: 26-Aug-1996
        Expiry date:  26-Aug-2026
        Last updated:  11-Jul-2024

    Registration status:
        Registered until expiry date.

    Name servers:
        ns1.example.net.
        ns2.example.net.       192.0.2.53

    WHOIS lookup made at 12:00:00 01-Oct-2024
";

pub const DENIC_EXAMPLE_DE: &str = "% Restricted rights.
%
Domain: example.de
Nserver: a.iana-servers.net
Nserver: b.iana-servers.net
Status: connect
Changed: 2018-03-12T21:44:25+01:00
";

pub const DENIC_FREE: &str = "Domain: free-name-123.de
Status: free
";

pub const RWHOIS_REFERRAL: &str = "Domain Name: example.net
ReferralServer: rwhois://rwhois.example.net:4321/
";
