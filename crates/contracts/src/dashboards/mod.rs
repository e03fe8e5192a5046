pub mod d405_app_level_retn_rem;
