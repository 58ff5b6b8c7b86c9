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

//! RON based configuration loading. All our config structs implement `Default` with reference values,
//! config files only need to be provided to override them

use std::{fs, path::Path, any::type_name};
use serde::de::DeserializeOwned;
use tracing::{debug,info};

use crate::errors::Result;

pub fn config_from_ron_str<T> (src: &str)->Result<T> where T: DeserializeOwned {
    Ok( ron::from_str(src)? )
}

pub fn load_ron_config<T,P> (path: P)->Result<T> where T: DeserializeOwned, P: AsRef<Path> {
    let path = path.as_ref();
    let src = fs::read_to_string(path)?;
    let config = config_from_ron_str(&src)?;
    info!("loaded {} from {:?}", type_name::<T>(), path);
    Ok(config)
}

/// load from path if given, otherwise fall back to T::default(). Errors in a provided file are not masked
pub fn load_ron_config_or_default<T,P> (path: Option<P>)->Result<T> where T: DeserializeOwned + Default, P: AsRef<Path> {
    match path {
        Some(path) => load_ron_config(path),
        None => {
            debug!("no config file, using default {}", type_name::<T>());
            Ok( T::default())
        }
    }
}
