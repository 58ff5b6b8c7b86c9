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

use serde::Deserialize;

pub mod altitude;
pub use altitude::{AltitudeLimit, AltitudeReference, RawAltitudeLimit, format_limit, format_raw_limit};

/// the vertical part of an airspace as we get it from the upstream airspace source
#[derive(Deserialize,Debug,Clone)]
#[serde(rename_all="camelCase")]
pub struct Airspace {
    pub name: String,

    #[serde(default)]
    pub lower_limit: Option<AltitudeLimit>,

    #[serde(default)]
    pub upper_limit: Option<AltitudeLimit>,
}

impl Airspace {
    /// "<lower> - <upper>", e.g. "GND - FL065"
    pub fn vertical_extent (&self)->String {
        format!("{} - {}", format_limit( self.lower_limit.as_ref()), format_limit( self.upper_limit.as_ref()))
    }
}
