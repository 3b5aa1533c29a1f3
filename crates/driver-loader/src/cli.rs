use driver_loader_core::loading::{DispatchStatus, LoadPlan, LoadReport};

/// Print one line per planned descriptor, then any pins that did not resolve.
pub fn print_plan(plan: &LoadPlan) {
    if plan.is_empty() {
        println!("Nothing to load.");
        return;
    }
    println!("Load plan:");
    for entry in plan.entries() {
        println!("  - {} [{}] via '{}'", entry.descriptor, entry.mode, entry.criterion);
    }
    for pin in plan.unresolved() {
        println!("  ! {}", pin);
    }
}

/// Print the per-driver outcome of a load followed by a summary line.
pub fn print_report(report: &LoadReport) {
    if report.gated {
        println!("Init-load skipped by startup gate.");
        return;
    }
    for pin in report.plan.unresolved() {
        println!("  ! {}", pin);
    }
    for record in report.dispatch.records() {
        let marker = match record.status {
            DispatchStatus::Installed(_) => "+",
            DispatchStatus::AlreadyLoaded(_) => "=",
            DispatchStatus::Failed(_) => "!",
        };
        println!("  {} {} [{}]: {}", marker, record.descriptor, record.mode, record.status);
    }
    println!(
        "Installed: {}, already loaded: {}, failed: {}",
        report.dispatch.installed_count(),
        report.dispatch.skipped_count(),
        report.failure_count()
    );
}
