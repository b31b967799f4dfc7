use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    admin_requests: AtomicU64,
    machines_emptied: AtomicU64,
    bottles_collected: AtomicU64,
    machines_added: AtomicU64,
    not_found: AtomicU64,
    login_failures: AtomicU64,
}

impl Metrics {
    pub fn record_request(&self) {
        self.admin_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_empty(&self, bottles: u32) {
        self.machines_emptied.fetch_add(1, Ordering::Relaxed);
        self.bottles_collected
            .fetch_add(u64::from(bottles), Ordering::Relaxed);
    }

    pub fn record_add(&self) {
        self.machines_added.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_login_failure(&self) {
        self.login_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let requests = self.admin_requests.load(Ordering::Relaxed);
        let emptied = self.machines_emptied.load(Ordering::Relaxed);
        let collected = self.bottles_collected.load(Ordering::Relaxed);
        let added = self.machines_added.load(Ordering::Relaxed);
        let not_found = self.not_found.load(Ordering::Relaxed);
        let login_failures = self.login_failures.load(Ordering::Relaxed);

        format!(
            "# TYPE rvm_admin_requests_total counter\n\
rvm_admin_requests_total {}\n\
# TYPE rvm_machines_emptied_total counter\n\
rvm_machines_emptied_total {}\n\
# TYPE rvm_bottles_collected_total counter\n\
rvm_bottles_collected_total {}\n\
# TYPE rvm_machines_added_total counter\n\
rvm_machines_added_total {}\n\
# TYPE rvm_not_found_total counter\n\
rvm_not_found_total {}\n\
# TYPE rvm_login_failures_total counter\n\
rvm_login_failures_total {}\n",
            requests, emptied, collected, added, not_found, login_failures
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_prometheus_reports_counters() {
        let metrics = Metrics::default();
        metrics.record_request();
        metrics.record_empty(10);
        metrics.record_empty(5);
        metrics.record_add();
        let text = metrics.render_prometheus();
        assert!(text.contains("rvm_admin_requests_total 1\n"));
        assert!(text.contains("rvm_machines_emptied_total 2\n"));
        assert!(text.contains("rvm_bottles_collected_total 15\n"));
        assert!(text.contains("rvm_machines_added_total 1\n"));
        assert!(text.contains("rvm_not_found_total 0\n"));
    }
}
