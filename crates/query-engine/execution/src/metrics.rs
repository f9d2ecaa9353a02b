//! Metrics setup and update for the gateway.

use prometheus::core::{AtomicI64, AtomicU64, GenericCounter, GenericGauge};
use prometheus::{Histogram, HistogramTimer};

#[derive(Debug, Clone)]
pub struct Metrics {
    query_total: GenericCounter<AtomicU64>,
    query_failures_total: GenericCounter<AtomicU64>,
    query_duration: Histogram,
    pool_size: GenericGauge<AtomicI64>,
    pool_idle_count: GenericGauge<AtomicI64>,
    pool_max_connections: GenericGauge<AtomicI64>,
}

impl Metrics {
    /// Set up counters and gauges used to produce Prometheus metrics
    pub fn initialize(metrics_registry: &mut prometheus::Registry) -> Result<Self, prometheus::Error> {
        let query_total = add_int_counter_metric(
            metrics_registry,
            "query_gateway_query_total",
            "Total successful queries.",
        )?;

        let query_failures_total = add_int_counter_metric(
            metrics_registry,
            "query_gateway_query_failures_total",
            "Total queries that failed in the database.",
        )?;

        let query_duration = add_histogram_metric(
            metrics_registry,
            "query_gateway_query_duration_seconds",
            "Time spent running a query against the database, in seconds.",
        )?;

        let pool_size = add_int_gauge_metric(
            metrics_registry,
            "query_gateway_pool_size",
            "The number of connections currently active. This includes idle connections.",
        )?;

        let pool_idle_count = add_int_gauge_metric(
            metrics_registry,
            "query_gateway_pool_idle",
            "The number of connections active and idle (not in use).",
        )?;

        let pool_max_connections = add_int_gauge_metric(
            metrics_registry,
            "query_gateway_pool_max_connections",
            "The maximum number of connections that this pool should maintain.",
        )?;

        Ok(Self {
            query_total,
            query_failures_total,
            query_duration,
            pool_size,
            pool_idle_count,
            pool_max_connections,
        })
    }

    pub fn record_successful_query(&self) {
        self.query_total.inc();
    }

    pub fn record_failed_query(&self) {
        self.query_failures_total.inc();
    }

    /// Start timing a query. The duration is recorded when the timer is observed or dropped.
    pub fn time_query(&self) -> HistogramTimer {
        self.query_duration.start_timer()
    }

    // update all pool gauges
    pub fn update_pool_metrics(&self, pool: &sqlx::PgPool) {
        let pool_size: i64 = pool.size().into();
        self.pool_size.set(pool_size);

        let pool_idle: i64 = pool.num_idle().try_into().unwrap_or(i64::MAX);
        self.pool_idle_count.set(pool_idle);

        let max_connections: i64 = pool.options().get_max_connections().into();
        self.pool_max_connections.set(max_connections);
    }
}

/// Create a new int counter metric and register it with the provided Prometheus Registry
fn add_int_counter_metric(
    metrics_registry: &mut prometheus::Registry,
    metric_name: &str,
    metric_description: &str,
) -> Result<GenericCounter<AtomicU64>, prometheus::Error> {
    let int_counter =
        prometheus::IntCounter::with_opts(prometheus::Opts::new(metric_name, metric_description))?;
    metrics_registry.register(Box::new(int_counter.clone()))?;
    Ok(int_counter)
}

/// Create a new int gauge metric and register it with the provided Prometheus Registry
fn add_int_gauge_metric(
    metrics_registry: &mut prometheus::Registry,
    metric_name: &str,
    metric_description: &str,
) -> Result<GenericGauge<AtomicI64>, prometheus::Error> {
    let int_gauge =
        prometheus::IntGauge::with_opts(prometheus::Opts::new(metric_name, metric_description))?;
    metrics_registry.register(Box::new(int_gauge.clone()))?;
    Ok(int_gauge)
}

/// Create a new histogram metric with the default buckets and register it with the provided Prometheus Registry
fn add_histogram_metric(
    metrics_registry: &mut prometheus::Registry,
    metric_name: &str,
    metric_description: &str,
) -> Result<Histogram, prometheus::Error> {
    let histogram = prometheus::Histogram::with_opts(prometheus::HistogramOpts::new(
        metric_name,
        metric_description,
    ))?;
    metrics_registry.register(Box::new(histogram.clone()))?;
    Ok(histogram)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_are_registered_and_counted() {
        let mut registry = prometheus::Registry::new();
        let metrics = Metrics::initialize(&mut registry).unwrap();

        metrics.record_successful_query();
        metrics.record_successful_query();
        metrics.record_failed_query();
        metrics.time_query().observe_duration();

        let families = registry.gather();
        let counter = |name: &str| {
            families
                .iter()
                .find(|family| family.get_name() == name)
                .map(|family| family.get_metric()[0].get_counter().get_value())
        };

        assert_eq!(counter("query_gateway_query_total"), Some(2.0));
        assert_eq!(counter("query_gateway_query_failures_total"), Some(1.0));
        assert!(families
            .iter()
            .any(|family| family.get_name() == "query_gateway_query_duration_seconds"));
    }

    #[test]
    fn metrics_cannot_be_registered_twice() {
        let mut registry = prometheus::Registry::new();
        Metrics::initialize(&mut registry).unwrap();
        assert!(Metrics::initialize(&mut registry).is_err());
    }
}
