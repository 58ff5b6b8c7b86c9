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

use serde::{Serialize,Deserialize};
use tracing_subscriber::EnvFilter;

pub mod angle;
pub mod datetime;
pub mod uom;
pub mod config;
pub mod errors;

pub use errors::{GlideCommonError,Result};

// syntactic sugar - this is just more readable in geometry code
#[inline(always)] pub fn sin(x:f64) -> f64 { x.sin() }
#[inline(always)] pub fn cos(x:f64) -> f64 { x.cos() }
#[inline(always)] pub fn sqrt(x:f64) -> f64 { x.sqrt() }
#[inline(always)] pub fn pow2(x:f64) -> f64 { x*x }
#[inline(always)] pub fn rad(x:f64)->f64 { x.to_radians() }

/// install a fmt subscriber that reads its max level from RUST_LOG.
/// Note this only succeeds if there is no global subscriber set yet, subsequent calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

/* #region BoundingBox ********************************************************************************************/

/// a geographic lat/lon box in degrees. This does not handle boxes that cross the antimeridian
#[derive(Debug,Copy,Clone,Serialize,Deserialize,PartialEq)]
#[serde(rename_all="camelCase")]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64
}

impl BoundingBox {
    pub fn new (min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64)->Self {
        BoundingBox { min_lat, max_lat, min_lon, max_lon }
    }

    /// single pass min/max reduction over (lat,lon) pairs. Returns None for empty input
    pub fn from_lat_lon<I> (coords: I)->Option<Self> where I: IntoIterator<Item=(f64,f64)> {
        let mut it = coords.into_iter();
        let (lat0,lon0) = it.next()?;

        let bbox = it.fold( BoundingBox::new( lat0, lat0, lon0, lon0), |bb, (lat,lon)| {
            BoundingBox {
                min_lat: bb.min_lat.min(lat),
                max_lat: bb.max_lat.max(lat),
                min_lon: bb.min_lon.min(lon),
                max_lon: bb.max_lon.max(lon)
            }
        });
        Some(bbox)
    }

    /// (lat,lon) of the box centroid
    pub fn center (&self)->(f64,f64) {
        ( (self.min_lat + self.max_lat) / 2.0, (self.min_lon + self.max_lon) / 2.0 )
    }

    #[inline] pub fn lat_span (&self)->f64 { self.max_lat - self.min_lat }
    #[inline] pub fn lon_span (&self)->f64 { self.max_lon - self.min_lon }

    pub fn contains (&self, lat: f64, lon: f64)->bool {
        lat >= self.min_lat && lat <= self.max_lat && lon >= self.min_lon && lon <= self.max_lon
    }
}

/* #endregion BoundingBox */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_reduction() {
        let bb = BoundingBox::from_lat_lon( vec![(46.5, 8.1), (46.7, 7.9), (46.6, 8.3)]).unwrap();
        assert_eq!( bb, BoundingBox::new( 46.5, 46.7, 7.9, 8.3));
        assert!( bb.contains( 46.6, 8.0));
        assert!( !bb.contains( 46.8, 8.0));

        assert!( BoundingBox::from_lat_lon( Vec::<(f64,f64)>::new()).is_none());
    }
}
