macro_rules! generate_component_token {
    ($token_type:ident for $inst_type:literal) => {
        #[doc = concat!(
            "An identifier used as a reference for a ",
            $inst_type,
            ", owned by whoever shades the intersections.\n\n",
            "The engine never looks inside a token, it only carries it from the mesh to the intersection."
        )]
        #[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, valuable::Valuable)]
        #[derive(serde::Serialize, serde::Deserialize)]
        pub struct $token_type(pub $crate::core::types::IdToken);

        impl std::fmt::Display for $token_type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(
                    f,
                    "{id:>0width$X}",
                    id = self.0,
                    width = $crate::core::types::IdToken::BITS as usize / 4
                )
            }
        }
    };
}

generate_component_token!(MaterialToken for "material");
