/// Supported products
///
/// The catalog is fixed at compile time; the server resolves each product
/// from its manifest file.

use crate::state::data::ProductRef;

pub const PRODUCTS: &[ProductRef] = &[
    ProductRef { id: "ws-windows", display_name: "VMware Workstation Pro for Windows", manifest_file: "ws-windows.xml" },
    ProductRef { id: "ws-linux", display_name: "VMware Workstation Pro for Linux", manifest_file: "ws-linux.xml" },
    ProductRef { id: "fusion-universal", display_name: "VMware Fusion Pro for macOS (Universal)", manifest_file: "fusion-universal.xml" },
    ProductRef { id: "fusion-arm64", display_name: "VMware Fusion Pro for macOS (ARM64)", manifest_file: "fusion-arm64.xml" },
    ProductRef { id: "fusion-intel", display_name: "VMware Fusion Pro for macOS (Intel)", manifest_file: "fusion.xml" },
    ProductRef { id: "player-linux", display_name: "VMware Player for Linux", manifest_file: "player-linux.xml" },
    ProductRef { id: "player-windows", display_name: "VMware Player for Windows", manifest_file: "player-windows.xml" },
    ProductRef { id: "vmrc-linux", display_name: "VMware Remote Console for Linux", manifest_file: "vmrc-linux.xml" },
    ProductRef { id: "vmrc-macos", display_name: "VMware Remote Console for macOS", manifest_file: "vmrc-macos.xml" },
    ProductRef { id: "vmrc-windows", display_name: "VMware Remote Console for Windows", manifest_file: "vmrc-windows.xml" },
];

/// Look up a product by id
pub fn find(id: &str) -> Option<&'static ProductRef> {
    PRODUCTS.iter().find(|p| p.id == id)
}
