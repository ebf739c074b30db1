// Copyright 2019-present The HuggingFace Inc. team.
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// # Utility to deserialize JSON configuration files
///
/// Configuration structures implementing this trait are expected to follow the
/// file structure of the [Transformers library](https://github.com/huggingface/transformers)
/// configuration files for the corresponding model.
pub trait Config
where
    for<'de> Self: Deserialize<'de>,
{
    /// Loads a configuration object from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - `Path` to the configuration JSON file.
    fn from_file<P: AsRef<Path>>(path: P) -> Self {
        let f = File::open(path).expect("Could not open configuration file.");
        let br = BufReader::new(f);
        serde_json::from_reader(br).expect("could not parse configuration")
    }
}
