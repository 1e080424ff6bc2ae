pub mod world_view;
