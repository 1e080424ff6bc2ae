pub mod hauler_plan;
