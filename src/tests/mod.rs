
mod update;
