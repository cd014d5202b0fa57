use std::ffi::OsStr;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Report section of a real `ab` run, trimmed to what the parser reads.
const AB_REPORT: &str = "Server Software:        nginx
Server Hostname:        127.0.0.1
Server Port:            8080

Document Path:          /health
Document Length:        2 bytes

Concurrency Level:      10
Time taken for tests:   0.412 seconds
Complete requests:      100
Failed requests:        0
Requests per second:    242.72 [#/sec] (mean)
Time per request:       41.200 [ms] (mean)
Time per request:       4.120 [ms] (mean, across all concurrent requests)

Connection Times (ms)
              min  mean[+/-sd] median   max
Connect:        0    1   0.4      1       3
Processing:     5   38  12.9     37      71
Waiting:        4   36  12.7     35      70
Total:          6   39  12.8     38      72

Percentage of the requests served within a certain time (ms)
  50%     38
  66%     44
  75%     48
  90%     56
  99%     70
 100%     72 (longest request)";

/// Writes a shell script standing in for `ab`.
///
/// Every invocation appends its arguments to `calls.log` in `dir`. A URL
/// containing `down` makes the script fail; `garbled` makes it print text the
/// parser rejects.
///
/// # Errors
///
/// Returns an error if the script cannot be written or made executable.
pub fn write_fake_ab(dir: &Path) -> Result<PathBuf, String> {
    let path = dir.join("fake-ab");
    let log = dir.join("calls.log");
    let script = format!(
        "#!/bin/sh
printf '%s\\n' \"$*\" >> '{log}'
for last; do :; done
case \"$last\" in
  *down*) echo 'apr_socket_connect(): Connection refused (111)' >&2; exit 1 ;;
  *garbled*) echo 'Benchmarking 127.0.0.1 (be patient)'; exit 0 ;;
esac
cat <<'AB'
{report}
AB
",
        log = log.display(),
        report = AB_REPORT
    );
    fs::write(&path, script).map_err(|err| format!("write fake ab failed: {}", err))?;
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .map_err(|err| format!("chmod fake ab failed: {}", err))?;
    Ok(path)
}

/// Returns the argument lines recorded by [`write_fake_ab`].
///
/// # Errors
///
/// Returns an error if the log cannot be read.
pub fn recorded_calls(dir: &Path) -> Result<Vec<String>, String> {
    let content = fs::read_to_string(dir.join("calls.log"))
        .map_err(|err| format!("read calls.log failed: {}", err))?;
    Ok(content.lines().map(str::to_owned).collect())
}

/// Counts the pages of the PDF at `path`.
///
/// # Errors
///
/// Returns an error if the file is missing or not a valid PDF.
pub fn pdf_page_count(path: &Path) -> Result<usize, String> {
    let document = lopdf::Document::load(path)
        .map_err(|err| format!("load PDF '{}' failed: {}", path.display(), err))?;
    Ok(document.get_pages().len())
}

/// Run the `abreport` binary from `workdir` and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_abreport<I, S>(workdir: &Path, args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = abreport_bin()?;
    Command::new(bin)
        .args(args)
        .current_dir(workdir)
        .env("RUST_LOG", "error")
        .env_remove("ABREPORT_LOG")
        .env_remove("AB_PATH")
        .output()
        .map_err(|err| format!("run abreport failed: {}", err))
}

#[must_use]
pub fn describe(output: &Output) -> String {
    format!(
        "status: {}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

fn abreport_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_abreport").map_or_else(
        || Err("CARGO_BIN_EXE_abreport missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
