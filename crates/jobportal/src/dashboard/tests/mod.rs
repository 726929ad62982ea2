mod common;
mod wire;
