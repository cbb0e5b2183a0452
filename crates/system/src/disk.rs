//! Mounted volume enumeration and fixed-disk classification

use std::path::PathBuf;

/// File systems that never count as local fixed storage
///
/// Network shares, optical media and memory/overlay pseudo file systems.
const NON_FIXED_FILE_SYSTEMS: &[&str] = &[
    "nfs",
    "nfs4",
    "cifs",
    "smbfs",
    "smb3",
    "sshfs",
    "fuse.sshfs",
    "9p",
    "afs",
    "ncpfs",
    "davfs",
    "iso9660",
    "udf",
    "tmpfs",
    "devtmpfs",
    "overlay",
    "squashfs",
];

/// A mounted storage volume as reported by the OS
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volume {
    /// Mount point (e.g., "/", "C:\")
    pub mount_point: PathBuf,
    /// Filesystem type (e.g., "ext4", "NTFS")
    pub file_system: String,
    /// Whether the OS flags the volume as removable media
    pub is_removable: bool,
}

impl Volume {
    /// Check if the volume is fixed, local, non-removable storage
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        if self.is_removable {
            return false;
        }
        let fs = self.file_system.trim().to_ascii_lowercase();
        !NON_FIXED_FILE_SYSTEMS.contains(&fs.as_str())
    }
}

/// Count the fixed volumes in a listing
#[must_use]
pub fn count_fixed(volumes: &[Volume]) -> usize {
    volumes.iter().filter(|v| v.is_fixed()).count()
}

/// List mounted volumes
///
/// A volume whose attributes cannot be read is reported by the OS layer with
/// whatever it could gather; it never aborts the listing of the others.
#[cfg(feature = "sysinfo")]
pub fn list() -> Vec<Volume> {
    use sysinfo::Disks;

    let disks = Disks::new_with_refreshed_list();

    disks
        .list()
        .iter()
        .map(|disk| Volume {
            mount_point: disk.mount_point().to_path_buf(),
            file_system: disk.file_system().to_string_lossy().into_owned(),
            is_removable: disk.is_removable(),
        })
        .collect()
}
