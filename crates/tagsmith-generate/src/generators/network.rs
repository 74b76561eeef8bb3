use fake::Fake;
use fake::faker::internet::en::{DomainSuffix, IPv4, IPv6, MACAddress, Password, SafeEmail, Username};
use fake::faker::lorem::en::Word;
use rand::{Rng, RngCore};

use super::{GeneratorRegistry, TextProvider};

pub const EMAIL: &str = "email";
pub const MAC_ADDRESS: &str = "mac_address";
pub const DOMAIN_NAME: &str = "domain_name";
pub const USERNAME: &str = "username";
pub const URL: &str = "url";
pub const IPV4: &str = "ipv4";
pub const IPV6: &str = "ipv6";
pub const PASSWORD: &str = "password";
pub const JWT: &str = "jwt";

const BASE64_URL: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_builtin(EMAIL, TextProvider::new(email));
    registry.register_builtin(MAC_ADDRESS, TextProvider::new(mac_address));
    registry.register_builtin(DOMAIN_NAME, TextProvider::new(domain_name));
    registry.register_builtin(USERNAME, TextProvider::new(username));
    registry.register_builtin(URL, TextProvider::new(url));
    registry.register_builtin(IPV4, TextProvider::new(ipv4));
    registry.register_builtin(IPV6, TextProvider::new(ipv6));
    registry.register_builtin(PASSWORD, TextProvider::new(password));
    registry.register_builtin(JWT, TextProvider::new(jwt));
}

fn email(rng: &mut dyn RngCore) -> String {
    SafeEmail().fake_with_rng(rng)
}

fn mac_address(rng: &mut dyn RngCore) -> String {
    MACAddress().fake_with_rng(rng)
}

fn domain_name(rng: &mut dyn RngCore) -> String {
    let label: String = Word().fake_with_rng(rng);
    let suffix: String = DomainSuffix().fake_with_rng(rng);
    format!("{}.{suffix}", label.to_lowercase())
}

fn username(rng: &mut dyn RngCore) -> String {
    Username().fake_with_rng(rng)
}

fn url(rng: &mut dyn RngCore) -> String {
    let scheme = if rng.random_bool(0.5) { "https" } else { "http" };
    format!("{scheme}://www.{}/", domain_name(rng))
}

fn ipv4(rng: &mut dyn RngCore) -> String {
    IPv4().fake_with_rng(rng)
}

fn ipv6(rng: &mut dyn RngCore) -> String {
    IPv6().fake_with_rng(rng)
}

fn password(rng: &mut dyn RngCore) -> String {
    Password(12..24).fake_with_rng(rng)
}

fn jwt(rng: &mut dyn RngCore) -> String {
    let header = base64_url_segment(36, rng);
    let payload = base64_url_segment(72, rng);
    let signature = base64_url_segment(43, rng);
    format!("{header}.{payload}.{signature}")
}

fn base64_url_segment(len: usize, rng: &mut dyn RngCore) -> String {
    (0..len)
        .map(|_| char::from(BASE64_URL[rng.random_range(0..BASE64_URL.len())]))
        .collect()
}
