/// Views reachable from the navigation rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Users,
    Beacons,
    Alerts,
    Settings,
}
