/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReplayError>;

#[derive(Error,Debug)]
pub enum ReplayError {

    #[error("track unavailable {0}")]
    TrackUnavailable(String),

    #[error("no async runtime to run the playback poll task")]
    NoRuntime,

    #[error("renderer bridge error {0}")]
    BridgeError(String),

    #[error("config error {0}")]
    ConfigError( #[from] glide_common::GlideCommonError),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("JSON error {0}")]
    JsonError( #[from] serde_json::Error),

    #[error("operation failed {0}")]
    OpFailedError(String)
}

pub fn op_failed (msg: impl ToString)->ReplayError {
    ReplayError::OpFailedError(msg.to_string())
}

pub fn bridge_error (msg: impl ToString)->ReplayError {
    ReplayError::BridgeError(msg.to_string())
}

#[macro_export]
macro_rules! op_failed {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::op_failed( format!( $fmt $(, $arg)* ))
    };
}
