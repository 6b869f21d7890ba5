mod config;
mod rotation_cycle;
