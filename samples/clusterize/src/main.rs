use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use primcluster::{cluster, de::gltf::primitives_of, MeshPrimitive};

mod cli;

#[derive(Debug, thiserror::Error)]
pub enum ClusterizeError {
    #[error("couldn't open glTF document {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: gltf::Error,
    },
    #[error(transparent)]
    Extract(#[from] primcluster::error::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub fn main() -> Result<(), ClusterizeError> {
    let cli = cli::Cli::parse();
    cli::initialize_tracing(&cli.log_filter, cli.log_format);

    let mut out = io::stdout().lock();
    for path in &cli.files {
        report(&mut out, path, cli.summary)?;
    }
    Ok(())
}

/// Print the clusters of every mesh within a glTF document.
#[tracing::instrument(skip(out))]
fn report(out: &mut impl Write, path: &Path, summary: bool) -> Result<(), ClusterizeError> {
    // only accessor indices are needed, so buffers are left unloaded
    let doc = gltf::Gltf::open(path).map_err(|source| ClusterizeError::Open {
        path: path.to_owned(),
        source,
    })?;

    writeln!(out, "{}", path.display())?;
    for mesh in doc.meshes() {
        let prims = primitives_of(&mesh)?;
        let clusters = cluster(&prims);
        tracing::info!(
            mesh = mesh.index(),
            primitives = prims.len(),
            clusters = clusters.len(),
            "clustered mesh"
        );

        writeln!(
            out,
            "mesh {} {:?}: {} primitives, {} clusters",
            mesh.index(),
            mesh.name().unwrap_or_default(),
            prims.len(),
            clusters.len()
        )?;
        if summary {
            continue;
        }
        for c in &clusters {
            writeln!(
                out,
                "  {:?} {}",
                c.members(),
                describe(&prims[c.representative()])
            )?;
        }
    }
    Ok(())
}

/// The attribute channels of a primitive, plus its morph target count.
fn describe(prim: &MeshPrimitive) -> String {
    let mut res: Vec<String> = prim
        .shape
        .attributes
        .iter()
        .flat_map(|attrs| attrs.present())
        .map(|c| c.to_string())
        .collect();
    match prim.shape.target_count() {
        0 => {}
        1 => res.push("1 target".to_owned()),
        n => res.push(format!("{n} targets")),
    }
    res.join(" ")
}
