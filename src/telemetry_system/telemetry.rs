use crate::delta_v_system::reducer::DeltaVReport;

pub struct Telemetry {
    pub log: Vec<String>,
    max_total_delta_v_vac: f64,
    min_total_delta_v_vac: f64,
    max_twr: f64,
    poll_count: usize,
    elapsed_time: f64,
}

impl Default for Telemetry {
    fn default() -> Self {
        Telemetry::new()
    }
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry {
            log: Vec::new(),
            max_total_delta_v_vac: 0.0,
            min_total_delta_v_vac: f64::MAX,
            max_twr: 0.0,
            poll_count: 0,
            elapsed_time: 0.0,
        }
    }

    fn format_duration(seconds: f64) -> String {
        let hours = (seconds / 3600.0).floor();
        let minutes = ((seconds % 3600.0) / 60.0).floor();
        let rest = seconds % 60.0;
        match (hours > 0.0, minutes > 0.0) {
            (true, _) => format!("{:.0}h {:.0}m {:.2}s", hours, minutes, rest),
            (false, true) => format!("{:.0}m {:.2}s", minutes, rest),
            (false, false) => format!("{:.2}s", seconds),
        }
    }

    fn format_mass(mass: f64) -> String {
        if mass >= 1000.0 {
            format!("{:.2} t", mass / 1000.0)
        } else {
            format!("{:.2} kg", mass)
        }
    }

    pub fn collect_data(&mut self, report: &DeltaVReport, delta_time: f64) {
        self.elapsed_time += delta_time;
        self.poll_count += 1;

        if report.total_delta_v_vac > self.max_total_delta_v_vac {
            self.max_total_delta_v_vac = report.total_delta_v_vac;
        }
        if report.total_delta_v_vac < self.min_total_delta_v_vac {
            self.min_total_delta_v_vac = report.total_delta_v_vac;
        }
        for entry in &report.delta_v_list {
            if entry.twr > self.max_twr {
                self.max_twr = entry.twr;
            }
        }

        let mut data = format!(
            "Time: {}\n\
                 Stage Delta-V: {:.1} m/s (atm) / {:.1} m/s (vac)\n\
                 Total Delta-V: {:.1} m/s (atm) / {:.1} m/s (vac)\n",
            Self::format_duration(self.elapsed_time),
            report.stage_delta_v_atom,
            report.stage_delta_v_vac,
            report.total_delta_v_atom,
            report.total_delta_v_vac,
        );
        for entry in &report.delta_v_list {
            data.push_str(&format!(
                "  Stage {}: {} -> {} | TWR {:.2} | SLT {:.2} | ISP {:.1}s | {:.1} / {:.1} m/s | burn {}\n",
                entry.stage,
                Self::format_mass(entry.start_mass),
                Self::format_mass(entry.end_mass),
                entry.twr,
                entry.slt,
                entry.isp,
                entry.atom_delta_v,
                entry.vac_delta_v,
                Self::format_duration(entry.time),
            ));
        }
        self.log.push(data);
    }

    pub fn max_total_delta_v_vac(&self) -> f64 {
        self.max_total_delta_v_vac
    }

    pub fn min_total_delta_v_vac(&self) -> f64 {
        if self.poll_count == 0 {
            0.0
        } else {
            self.min_total_delta_v_vac
        }
    }

    pub fn max_twr(&self) -> f64 {
        self.max_twr
    }

    pub fn poll_count(&self) -> usize {
        self.poll_count
    }

    pub fn display_data(&self) {
        println!("--- Delta-V Telemetry ---");
        for entry in &self.log {
            println!("{}", entry);
        }
        println!("--- End of Telemetry ---");

        println!("\n--- Summary ---");
        println!("Polls: {}", self.poll_count);
        println!("Max Total Delta-V (vac): {:.1} m/s", self.max_total_delta_v_vac);
        println!("Min Total Delta-V (vac): {:.1} m/s", self.min_total_delta_v_vac());
        println!("Max TWR: {:.2}", self.max_twr);
    }
}
