//! Navigation bar shown on every page.

/// One entry of the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

/// `(label, href, icon)` in display order.
pub const LINKS: [(&str, &str, &str); 7] = [
    ("Home", "/", "bi bi-house-door"),
    ("Clientes", "/clients", "bi bi-people"),
    ("Proveedores", "/providers", "bi bi-people"),
    ("Productos", "/products", "bi bi-basket3"),
    ("Medicinas", "/medicines", "bi bi-capsule"),
    ("Mascotas", "/pets", "bi bi-github"),
    ("Veterinarios", "/vets", "bi bi-people"),
];

/// Builds the navigation bar for a request path.
///
/// Home is active only on `/`; every other link is active when the path
/// starts with its href.
pub fn navbar(path: &str) -> Vec<NavLink> {
    LINKS
        .iter()
        .map(|&(label, href, icon)| NavLink {
            label,
            href,
            icon,
            active: is_active(href, path),
        })
        .collect()
}

fn is_active(href: &str, path: &str) -> bool {
    if href == "/" {
        path == "/"
    } else {
        path.starts_with(href)
    }
}
