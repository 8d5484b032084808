use crate::constants::STANDARD_GRAVITY;

// ISP always converts to exhaust velocity through g0. Only the weight side of
// TWR/SLT uses the configured reference gravity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RocketEquation {
    pub reference_gravity: f64,
}

impl Default for RocketEquation {
    fn default() -> Self {
        RocketEquation::new(STANDARD_GRAVITY)
    }
}

impl RocketEquation {
    pub fn new(reference_gravity: f64) -> Self {
        RocketEquation { reference_gravity }
    }

    pub fn exhaust_velocity(isp: f64) -> f64 {
        isp * STANDARD_GRAVITY
    }

    pub fn delta_v(&self, isp: f64, fuel_mass: f64, start_mass: f64) -> f64 {
        let end_mass = start_mass - fuel_mass;
        if fuel_mass <= 0.0 || end_mass <= 0.0 || isp <= 0.0 {
            return 0.0;
        }
        Self::exhaust_velocity(isp) * (start_mass / end_mass).ln()
    }

    pub fn burn_time(&self, isp: f64, fuel_mass: f64, thrust: f64) -> f64 {
        if thrust <= 0.0 || isp <= 0.0 {
            return 0.0;
        }
        let mass_flow_rate = thrust / Self::exhaust_velocity(isp);
        fuel_mass / mass_flow_rate
    }

    pub fn thrust_to_weight(&self, thrust: f64, mass: f64) -> f64 {
        if thrust <= 0.0 || mass <= 0.0 {
            return 0.0;
        }
        thrust / (mass * self.reference_gravity)
    }
}
