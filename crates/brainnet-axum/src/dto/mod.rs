//! Data Transfer Objects (DTOs) for the HTTP API contract.
//!
//! Field names here are the wire contract; internal types convert into them.

pub mod status;

pub use status::{
    ApiStatusDto, DetailedHealthDto, LlmStatusDto, ReadinessDto, StorageInfoDto, SurfaceStatusDto,
    WelcomeDto,
};
