// ABOUTME: Configuration module organization for the smoothie macros service
// ABOUTME: Re-exports the environment-driven server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sinko Wellness

//! Configuration management for the service

/// Environment-based configuration management
pub mod environment;

pub use environment::{DatasetConfig, Environment, LogLevel, ServerConfig};
