pub mod collision_handling;
pub mod cool_down_handling;
pub mod entity_spawning;
pub mod mouse_dragging;
pub mod object_positioning;
pub mod player_controls_handling;
pub mod rendering;
