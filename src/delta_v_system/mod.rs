pub mod reducer;
pub mod rocket_equation;
