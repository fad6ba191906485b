// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Signing values used in presigned urls.
pub const ALGORITHM_AWS4_HMAC_SHA_256: &str = "AWS4-HMAC-SHA256";
pub const AWS4_REQUEST_TYPE: &str = "aws4_request";
pub const SERVICE: &str = "kinesisvideo";
pub const METHOD: &str = "GET";
pub const SIGNED_HEADERS: &str = "host";
pub const SCHEME: &str = "wss";

/// Seconds a presigned url stays valid after its signing time.
///
/// Signaling connections must be opened within five minutes.
pub const EXPIRES_IN_SECONDS: u64 = 299;
pub const EXPIRES_IN: &str = "299";

// Query parameters used in presigned urls.
pub const X_AMZ_ALGORITHM: &str = "X-Amz-Algorithm";
pub const X_AMZ_CREDENTIAL: &str = "X-Amz-Credential";
pub const X_AMZ_DATE: &str = "X-Amz-Date";
pub const X_AMZ_EXPIRES: &str = "X-Amz-Expires";
pub const X_AMZ_SECURITY_TOKEN: &str = "X-Amz-Security-Token";
pub const X_AMZ_SIGNATURE: &str = "X-Amz-Signature";
pub const X_AMZ_SIGNED_HEADERS: &str = "X-Amz-SignedHeaders";

// Query parameters of the signaling connect operations.
pub const X_AMZ_CHANNEL_ARN: &str = "X-Amz-ChannelARN";
pub const X_AMZ_CLIENT_ID: &str = "X-Amz-ClientId";

/// AsciiSet for [AWS UriEncode](https://docs.aws.amazon.com/AmazonS3/latest/API/sig-v4-header-based-auth.html)
///
/// - URI encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
/// - `+` and `=` are encoded as `%2B` and `%3D`, even though most url encoders leave them as is in query values.
pub static AWS_QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
