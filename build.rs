#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    let mut res = WindowsResource::new();
    // L'icona è opzionale: senza res/obras.ico si compila comunque
    if std::path::Path::new("res/obras.ico").exists() {
        res.set_icon("res/obras.ico");
    }
    res.set("FileDescription", "obras CLI")
        .set("ProductName", "obras")
        .set("OriginalFilename", "obras.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed Windows resources");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
