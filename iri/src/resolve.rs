//! Resolution of relative references against an absolute base, per
//! [RFC 3986 §5.2](https://tools.ietf.org/html/rfc3986#section-5.2).
//!
//! For URN bases the namespace-specific string plays the role of the path
//! and the q-component the role of the query; the base's r-component is
//! never carried into the resolved URN, since it pertains to the
//! resolution of the base itself.

use crate::{AbsoluteIri, Iri, Path, RelativeIri, Url, Urn};

impl Url {
    /// Resolve `reference` against this URL, per the transform of
    /// [RFC 3986 §5.2.2](https://tools.ietf.org/html/rfc3986#section-5.2.2).
    pub fn resolve(&self, reference: &RelativeIri) -> Url {
        let (authority, path, query) = if reference.authority().is_some() {
            (
                reference.authority().cloned(),
                reference.path().clone().remove_dot_segments(),
                reference.query().cloned(),
            )
        } else if reference.path().is_empty() {
            (
                self.authority().cloned(),
                self.path().clone(),
                reference.query().or(self.query()).cloned(),
            )
        } else if reference.path().starts_with_slash() {
            (
                self.authority().cloned(),
                reference.path().clone().remove_dot_segments(),
                reference.query().cloned(),
            )
        } else {
            (
                self.authority().cloned(),
                merge(self.authority().is_some(), self.path(), reference.path()),
                reference.query().cloned(),
            )
        };
        Url::new(
            self.scheme().clone(),
            authority,
            path,
            query,
            reference.fragment().cloned(),
        )
    }
}

impl Urn {
    /// Resolve `reference` against this URN.
    ///
    /// The resolved URN keeps the base's nid. An empty reference path keeps
    /// the base's nss and (in the absence of a reference query) its
    /// q-component; otherwise the reference path replaces or merges into
    /// the nss, stripped of any leading `/` so the nss stays rootless.
    /// The resolved URN never carries an r-component.
    pub fn resolve(&self, reference: &RelativeIri) -> Urn {
        let (nss, q) = if reference.authority().is_none() && reference.path().is_empty() {
            (
                self.nss().clone(),
                reference.query().or(self.q_component()).cloned(),
            )
        } else {
            let path = if reference.authority().is_some() || reference.path().starts_with_slash() {
                reference.path().clone().remove_dot_segments()
            } else {
                let front = self.nss().clone().drop_last_segment();
                reference.path().clone().prepend(front).remove_dot_segments()
            };
            (strip_leading_slashes(path), reference.query().cloned())
        };
        Urn::new(
            self.nid().clone(),
            nss,
            None,
            q,
            reference.fragment().cloned(),
        )
    }
}

impl AbsoluteIri {
    /// Resolve an IRI reference against this base.
    ///
    /// Absolute references resolve to themselves; relative references are
    /// resolved against the base URL or URN.
    pub fn resolve(&self, reference: &Iri) -> AbsoluteIri {
        match reference {
            Iri::Url(url) => AbsoluteIri::Url(url.clone()),
            Iri::Urn(urn) => AbsoluteIri::Urn(urn.clone()),
            Iri::Relative(rel) => match self {
                AbsoluteIri::Url(base) => AbsoluteIri::Url(base.resolve(rel)),
                AbsoluteIri::Urn(base) => AbsoluteIri::Urn(base.resolve(rel)),
            },
        }
    }
}

// RFC 3986 §5.2.3
fn merge(base_has_authority: bool, base_path: &Path, ref_path: &Path) -> Path {
    let front = if base_has_authority && base_path.is_empty() {
        Path::Slash(Box::new(Path::Empty))
    } else {
        base_path.clone().drop_last_segment()
    };
    ref_path.clone().prepend(front).remove_dot_segments()
}

fn strip_leading_slashes(path: Path) -> Path {
    let mut reversed = path.reverse();
    while matches!(reversed, Path::Slash(_)) {
        reversed.pop_outer();
    }
    reversed.reverse()
}
