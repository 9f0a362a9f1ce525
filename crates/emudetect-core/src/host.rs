// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Emudetect

//! Probes backed by the process's own operating system.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};

use crate::error::ProbeError;
use crate::probe::{CommandProbe, FileProbe, ProbeCommand, SystemProperties};

/// Filesystem probe over `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFileProbe;

impl FileProbe for HostFileProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_readable(&self, path: &Path) -> bool {
        File::open(path).is_ok()
    }

    fn read_head(&self, path: &Path, limit: usize) -> Result<Vec<u8>, ProbeError> {
        let io_error = |source| ProbeError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(io_error)?;
        let mut data = Vec::with_capacity(limit);
        file.take(limit as u64)
            .read_to_end(&mut data)
            .map_err(io_error)?;
        Ok(data)
    }
}

/// Subprocess probe over `tokio::process`.
///
/// Output is stdout followed by stderr. A non-zero exit status is not an
/// error; whatever the process printed is returned. Each run drives its own
/// current-thread runtime, so `run` must not be called from inside an async
/// task.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostCommandProbe {
    timeout: Option<Duration>,
}

impl HostCommandProbe {
    /// `timeout == None` waits for the process indefinitely.
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    async fn run_async(&self, command: &ProbeCommand) -> Result<String, ProbeError> {
        let mut process = Command::new(&command.program);
        process
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        // Own process group so a timeout can take down anything the child forked.
        #[cfg(unix)]
        process.process_group(0);
        if let Some(dir) = &command.working_dir {
            process.current_dir(dir);
        }

        let mut child = process.spawn().map_err(|source| ProbeError::Spawn {
            command: command.to_string(),
            source,
        })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let collect = async {
            let mut out = Vec::new();
            let mut err = Vec::new();
            let (read_out, read_err, status) = tokio::join!(
                read_stream(stdout, &mut out),
                read_stream(stderr, &mut err),
                child.wait(),
            );
            read_out?;
            read_err?;
            status?;
            Ok::<_, std::io::Error>((out, err))
        };

        let collected = match self.timeout {
            Some(timeout) => match tokio::time::timeout(timeout, collect).await {
                Ok(collected) => collected,
                Err(_) => {
                    terminate(&mut child).await;
                    return Err(ProbeError::Timeout {
                        command: command.to_string(),
                        timeout,
                    });
                }
            },
            None => collect.await,
        };
        let (out, err) = collected.map_err(|source| ProbeError::Output {
            command: command.to_string(),
            source,
        })?;

        let mut text = String::from_utf8_lossy(&out).into_owned();
        text.push_str(&String::from_utf8_lossy(&err));
        Ok(text)
    }
}

impl CommandProbe for HostCommandProbe {
    fn run(&self, command: &ProbeCommand) -> Result<String, ProbeError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|source| ProbeError::Spawn {
                command: command.to_string(),
                source,
            })?;
        runtime.block_on(self.run_async(command))
    }
}

async fn read_stream<R>(stream: Option<R>, buf: &mut Vec<u8>) -> std::io::Result<()>
where
    R: AsyncRead + Unpin,
{
    if let Some(mut stream) = stream {
        stream.read_to_end(buf).await?;
    }
    Ok(())
}

/// Kills the child's process group, then the child itself, and reaps it.
async fn terminate(child: &mut Child) {
    #[cfg(unix)]
    if let Some(pid) = child.id() {
        // Unreaped, so the pid still names the group it leads.
        unsafe {
            libc::killpg(pid as libc::pid_t, libc::SIGKILL);
        }
    }
    if let Err(e) = child.kill().await {
        tracing::debug!("Failed to reap timed-out command: {}", e);
    }
}

/// System property lookup through bionic's property area.
///
/// Empty values are reported as unset, matching how bionic signals a
/// missing property. Off Android every property is unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct AndroidPropertyProbe;

#[cfg(target_os = "android")]
impl SystemProperties for AndroidPropertyProbe {
    fn system_property(&self, name: &str) -> Result<Option<String>, ProbeError> {
        let key = std::ffi::CString::new(name).map_err(|_| ProbeError::Property {
            name: name.to_string(),
            reason: "name contains NUL".to_string(),
        })?;
        let mut value = [0 as libc::c_char; libc::PROP_VALUE_MAX as usize];
        let len = unsafe { libc::__system_property_get(key.as_ptr(), value.as_mut_ptr()) };
        if len <= 0 {
            return Ok(None);
        }
        let bytes: Vec<u8> = value[..len as usize].iter().map(|&c| c as u8).collect();
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }
}

#[cfg(not(target_os = "android"))]
impl SystemProperties for AndroidPropertyProbe {
    fn system_property(&self, _name: &str) -> Result<Option<String>, ProbeError> {
        Ok(None)
    }
}
