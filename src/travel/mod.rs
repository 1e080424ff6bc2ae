pub mod travel_spec;
