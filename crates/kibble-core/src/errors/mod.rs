// ABOUTME: Unified error type for kibble input loading and validation
// ABOUTME: AppError with stable error codes and conversions from serde and io errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Scoring itself never fails: unknown ingredients, unparsable amounts and
//! missing nutrient entries degrade to fallback values inside a well-formed
//! result. `AppError` covers the outer boundary only (reading and validating
//! recipe and animal JSON, configuration, CLI I/O).

use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Input failed a structural validation rule
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Input could not be decoded (malformed JSON, wrong shape)
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat,
    /// A referenced file or record does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound,
    /// Configuration could not be loaded or failed validation
    #[serde(rename = "CONFIGURATION_ERROR")]
    ConfigurationError,
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Short human-readable description of the code
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid input",
            Self::InvalidFormat => "Invalid format",
            Self::ResourceNotFound => "Resource not found",
            Self::ConfigurationError => "Configuration error",
            Self::InternalError => "Internal error",
        }
    }

    /// Process exit code used by the CLI for this error class
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InvalidInput | Self::InvalidFormat => 2,
            Self::ResourceNotFound => 3,
            Self::ConfigurationError => 4,
            Self::InternalError => 1,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Application error with a stable code and a human-readable message
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct AppError {
    /// Error classification
    pub code: ErrorCode,
    /// Detail message
    pub message: String,
}

impl AppError {
    /// Create an error with an explicit code
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Input failed validation
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Input could not be decoded
    #[must_use]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Referenced resource is missing
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceNotFound, message)
    }

    /// Configuration problem
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigurationError, message)
    }

    /// Unexpected internal failure
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Prefix the message with where the error happened
    #[must_use]
    pub fn with_context(mut self, context: &str) -> Self {
        self.message = format!("{context}: {}", self.message);
        self
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_format(err.to_string())
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            Self::not_found(err.to_string())
        } else {
            Self::internal(err.to_string())
        }
    }
}

/// Result alias used across the workspace
pub type AppResult<T> = Result<T, AppError>;
