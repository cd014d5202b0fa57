use crate::domain::{
    ChartImage, ConnectionTimes, ParsedResult, RawOutput, Target, TargetResult,
};

/// Output captured from `ab -n 10000 -c 500` against a local endpoint.
pub(crate) const SAMPLE_AB_OUTPUT: &str = "This is ApacheBench, Version 2.3 <$Revision: 1903618 $>
Copyright 1996 Adam Twiss, Zeus Technology Ltd, http://www.zeustech.net/
Licensed to The Apache Software Foundation, http://www.apache.org/

Benchmarking localhost (be patient)
Completed 1000 requests
Completed 2000 requests
Finished 10000 requests


Server Software:        Kestrel
Server Hostname:        localhost
Server Port:            5001

Document Path:          /api/v1/user/neighborhood
Document Length:        112 bytes

Concurrency Level:      500
Time taken for tests:   19.096 seconds
Complete requests:      10000
Failed requests:        0
Total transferred:      2460000 bytes
HTML transferred:       1120000 bytes
Requests per second:    523.67 [#/sec] (mean)
Time per request:       954.796 [ms] (mean)
Time per request:       1.908 [ms] (mean, across all concurrent requests)
Transfer rate:          125.80 [Kbytes/sec] received

Connection Times (ms)
              min  mean[+/-sd] median   max
Connect:        0    1   0.3      1       5
Processing:     2    3   1.1      3      12
Waiting:        1    2   0.9      2      10
Total:          2    4   1.2      4      14

Percentage of the requests served within a certain time (ms)
  50%      4
  66%      4
  75%      5
  80%      5
  90%      6
  95%      7
  98%      9
  99%     11
 100%     14 (longest request)
";

pub(crate) fn sample_raw_output() -> RawOutput {
    RawOutput::from(SAMPLE_AB_OUTPUT)
}

pub(crate) fn sample_parsed_result() -> ParsedResult {
    ParsedResult {
        complete_requests: 10_000,
        requests_per_second: 523.67,
        time_per_request_ms: 954.796,
        connection_times: ConnectionTimes::from_phase_rows(&[
            [0.0, 1.0, 0.3, 1.0, 5.0],
            [2.0, 3.0, 1.1, 3.0, 12.0],
            [1.0, 2.0, 0.9, 2.0, 10.0],
            [2.0, 4.0, 1.2, 4.0, 14.0],
        ]),
        percentiles: [(50, 4), (66, 4), (90, 6), (100, 14)].into_iter().collect(),
    }
}

/// Builds a small solid PNG without touching the font stack.
pub(crate) fn solid_png(width: u32, height: u32) -> Result<ChartImage, String> {
    use image::ImageEncoder;
    use image::codecs::png::PngEncoder;

    let pixel_count = usize::try_from(width)
        .ok()
        .and_then(|w| usize::try_from(height).ok().and_then(|h| w.checked_mul(h)))
        .and_then(|pixels| pixels.checked_mul(3))
        .ok_or_else(|| "pixel count overflow".to_owned())?;
    let pixels = vec![200u8; pixel_count];
    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(&pixels, width, height, image::ColorType::Rgb8)
        .map_err(|err| format!("encode png failed: {}", err))?;
    Ok(ChartImage::new(png, width, height))
}

pub(crate) fn sample_target_result(url: &str) -> Result<TargetResult, String> {
    let target = Target::parse(url).map_err(|err| format!("bad target: {}", err))?;
    Ok(TargetResult {
        target,
        parsed: sample_parsed_result(),
        chart: solid_png(80, 60)?,
    })
}

pub(crate) fn approx_eq(left: &[f64], right: &[f64]) -> bool {
    const EPSILON: f64 = 1e-9;
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(a, b)| (a - b).abs() < EPSILON)
}

pub(crate) fn run_async_test<F, T>(future: F) -> Result<T, String>
where
    F: std::future::Future<Output = Result<T, String>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))?;
    runtime.block_on(future)
}

/// Writes an executable shell script standing in for the benchmark tool.
#[cfg(unix)]
pub(crate) fn write_stub_tool(
    dir: &std::path::Path,
    name: &str,
    body: &str,
) -> Result<std::path::PathBuf, String> {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body))
        .map_err(|err| format!("write stub failed: {}", err))?;
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .map_err(|err| format!("chmod stub failed: {}", err))?;
    Ok(path)
}
