pub mod optimized_route;
pub mod route_stop;
