//! Operator summary printed after a successful deployment.

/// Print access URLs, default logins, and management hints.
///
/// Plain stdout on purpose: this is operator UX, not telemetry, and it has
/// to stay readable when logs go to JSON or journald.
pub fn print_summary() {
    println!();
    println!("FIP platform deployed.");
    println!();
    println!("Access:");
    println!("  api                http://localhost:5000");
    println!("  ai-analytics       http://localhost:5001");
    println!("  smart-map          http://localhost:5002");
    println!("  fleet-optimizer    http://localhost:5003");
    println!("  predictive-alerts  http://localhost:5004");
    println!("  frontend           http://localhost:3000");
    println!();
    println!("Default logins:");
    println!("  admin / admin123");
    println!("  fleet_manager / fleet123");
    println!();
    println!("Manage:");
    println!("  docker compose ps");
    println!("  docker compose logs -f <service>");
    println!("  docker compose down");
}
