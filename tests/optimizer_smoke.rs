use route_sampler::constraints::Constraints;
use route_sampler::haversine::route_distance;
use route_sampler::solver::RouteOptimizer;
use route_sampler::stop::{Stop, StopKind};

#[test]
fn optimizes_small_delivery_round() {
    let stops = vec![
        Stop::new(44.4268, 26.1025, StopKind::Pickup).with_address("Piata Unirii"),
        Stop::new(44.4355, 26.1011, StopKind::Delivery).with_time_window("09:00", "10:00"),
        Stop::new(44.4343, 26.1094, StopKind::Delivery).with_priority(1),
        Stop::new(44.4255, 26.1197, StopKind::Waypoint),
        Stop::new(44.4315, 26.0977, StopKind::Delivery),
    ];

    let optimizer: RouteOptimizer = RouteOptimizer::default();
    let result = optimizer
        .optimize_with_seed(&stops, &Constraints::default().with_max_distance(25.0), "primary", 42)
        .unwrap();

    assert_eq!(result.route.len(), stops.len());
    assert_eq!(result.pool.as_ref().map(|p| p.size), Some(24));
    assert!(route_distance(&result.route) > 0.0);
    assert!(result.fitness.is_some());
}
